//! End-to-end newsletter build.
//!
//! URLs are validated, then fetched and extracted one at a time in input order.
//! A URL that fails is logged and skipped; the run only fails when none survive.
//!
//! # Example
//!
//! ```rust,no_run
//! use newsroll_core::{HttpFetcher, NewsletterConfig, build_newsletter};
//!
//! # async fn example() -> newsroll_core::Result<()> {
//! let config = NewsletterConfig::default();
//! let fetcher = HttpFetcher::new(config.fetch.clone())?;
//! let urls = vec!["https://news.example/a".to_string(), "https://news.example/b".to_string()];
//! let newsletter = build_newsletter(&fetcher, &urls, "<h1>{{MAIN_TITLE}}</h1>", &config).await?;
//! println!("{}", newsletter.html);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::blurb::DEFAULT_BLURB_LEN;
use crate::{ArticleRecord, Context, FetchConfig, Fetcher, NewsletterError, Result};
use crate::{ensure_same_domain, extract_article, render, select};

/// Fewest URLs a newsletter can be built from.
pub const MIN_URLS: usize = 2;

/// Most URLs the newsletter layout is meant for; more is allowed.
pub const MAX_URLS: usize = 10;

/// Configuration for a newsletter run.
#[derive(Debug, Clone)]
pub struct NewsletterConfig {
    /// Blurb budget in characters (default: 220).
    pub blurb_len: usize,

    /// HTTP settings for fetching article pages.
    pub fetch: FetchConfig,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self { blurb_len: DEFAULT_BLURB_LEN, fetch: FetchConfig::default() }
    }
}

/// A URL dropped from the run, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedUrl {
    pub url: String,
    pub reason: String,
}

/// Articles gathered from a URL list.
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    /// Extracted and summarised records, in fetch order.
    pub articles: Vec<ArticleRecord>,
    /// URLs that could not be fetched.
    pub skipped: Vec<SkippedUrl>,
}

/// Result of a full newsletter build.
#[derive(Debug, Clone)]
pub struct Newsletter {
    /// Hostname shared by every input URL.
    pub hostname: String,
    /// Surviving articles, in fetch order.
    pub articles: Vec<ArticleRecord>,
    /// URLs that were skipped.
    pub skipped: Vec<SkippedUrl>,
    /// Context substituted into the template.
    pub context: Context,
    /// Rendered document.
    pub html: String,
}

/// Fetch, extract and summarise each URL in order.
///
/// Failures are recorded in [`Harvest::skipped`] and never abort the loop.
pub async fn collect_articles<F: Fetcher>(fetcher: &F, urls: &[String], blurb_len: usize) -> Harvest {
    let mut harvest = Harvest::default();

    for url in urls {
        match fetcher.fetch(url).await {
            Ok(html) => {
                let article = extract_article(&html, url).with_blurb(blurb_len);
                info!(%url, bytes = html.len(), title = %article.title, "Fetched article");
                harvest.articles.push(article);
            }
            Err(e) => {
                warn!(%url, error = %e, "Skipping URL");
                harvest.skipped.push(SkippedUrl { url: url.clone(), reason: e.to_string() });
            }
        }
    }

    harvest
}

/// Check the URL count and shared hostname before any fetching.
pub fn validate_urls(urls: &[String]) -> Result<String> {
    if urls.len() < MIN_URLS {
        return Err(NewsletterError::NotEnoughUrls { found: urls.len(), required: MIN_URLS });
    }
    ensure_same_domain(urls)
}

/// Run the whole pipeline: validate, fetch, select, build the context and render.
///
/// # Errors
///
/// - [`NewsletterError::NotEnoughUrls`] for fewer than two URLs
/// - [`NewsletterError::MixedDomains`] when URLs span hostnames
/// - [`NewsletterError::NoArticles`] when every URL was skipped
pub async fn build_newsletter<F: Fetcher>(
    fetcher: &F,
    urls: &[String],
    template: &str,
    config: &NewsletterConfig,
) -> Result<Newsletter> {
    let hostname = validate_urls(urls)?;
    let Harvest { articles, skipped } = collect_articles(fetcher, urls, config.blurb_len).await;

    if articles.is_empty() {
        return Err(NewsletterError::NoArticles);
    }

    let selection = select(&articles)?;
    let context = Context::from_selection(&hostname, &selection);
    info!(
        hostname = %hostname,
        main = %selection.main.url,
        articles = articles.len(),
        skipped = skipped.len(),
        "Selected main story"
    );

    let html = render(template, &context);

    Ok(Newsletter { hostname, articles, skipped, context, html })
}
