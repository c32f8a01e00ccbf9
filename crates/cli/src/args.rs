use std::path::PathBuf;

use clap::Parser;
use newsroll_core::{DEFAULT_BLURB_LEN, DEFAULT_USER_AGENT, FetchConfig, NewsletterConfig};

/// Build a newsletter (HTML) from 2-10 article URLs on the same site
#[derive(Parser, Debug)]
#[command(name = "newsroll")]
#[command(version)]
#[command(about = "Build a newsletter (HTML) from 2-10 article URLs (same domain)", long_about = None)]
pub struct Args {
    /// Article URLs (same domain). If empty, reads them from --urls-file
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// HTML template file with {{KEY}} placeholders
    #[arg(long, default_value = "newsletter_template.html", value_name = "FILE")]
    pub template: PathBuf,

    /// Output HTML file (overwritten if it exists)
    #[arg(long, default_value = "newsletter_output.html", value_name = "FILE")]
    pub out: PathBuf,

    /// Newline-separated URL list used when no URLs are given
    #[arg(long, default_value = "urls.txt", value_name = "FILE")]
    pub urls_file: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    pub timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Maximum blurb length in characters
    #[arg(long, default_value_t = DEFAULT_BLURB_LEN, value_name = "NUM")]
    pub blurb_len: usize,

    /// Print the template context as JSON to stdout
    #[arg(long)]
    pub dump_context: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn newsletter_config(&self) -> NewsletterConfig {
        NewsletterConfig {
            blurb_len: self.blurb_len,
            fetch: FetchConfig {
                timeout: self.timeout,
                user_agent: self.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            },
        }
    }
}
