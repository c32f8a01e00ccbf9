pub mod article;
pub mod blurb;
pub mod context;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod parse;
pub mod pipeline;
pub mod select;
pub mod template;

pub use article::ArticleRecord;
pub use blurb::{DEFAULT_BLURB_LEN, clamp_text, summarize};
pub use context::Context;
pub use domain::{ensure_same_domain, hostname};
pub use error::{NewsletterError, Result};
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
pub use fetch::{DEFAULT_USER_AGENT, FetchConfig, Fetcher, parse_url_list, read_text_file, read_url_list};
pub use metadata::{StructuredArticle, extract_article};
pub use parse::{Document, Element};
pub use pipeline::{
    Harvest, MAX_URLS, MIN_URLS, Newsletter, NewsletterConfig, SkippedUrl, build_newsletter, collect_articles,
    validate_urls,
};
pub use select::{Selection, rank, select};
pub use template::{placeholder, render, unresolved_placeholders};
