//! Error types for newsletter operations.
//!
//! This module defines the main error type [`NewsletterError`] which covers
//! every failure a newsletter run can hit: fetching pages, validating the
//! input URL list, reading the template and writing the rendered output.
//!
//! Malformed article markup is never an error. Extraction falls back to empty
//! fields instead, so the variants here are either fatal for the whole run or
//! fatal for a single URL (which the pipeline then skips).
//!
//! # Example
//!
//! ```rust
//! use newsroll_core::{NewsletterError, Result};
//!
//! fn require_pair(urls: &[&str]) -> Result<()> {
//!     if urls.len() < 2 {
//!         return Err(NewsletterError::NotEnoughUrls { found: urls.len(), required: 2 });
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for newsletter generation.
///
/// # Example
///
/// ```rust
/// use newsroll_core::{NewsletterError, ensure_same_domain};
///
/// let urls = ["https://a.example/1", "https://b.example/2"];
/// match ensure_same_domain(&urls) {
///     Ok(host) => println!("All from {}", host),
///     Err(NewsletterError::MixedDomains { domains }) => println!("Mixed: {:?}", domains),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum NewsletterError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers network errors, DNS failures, connection issues and non-2xx
    /// response statuses.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL has no `http://` or `https://` prefix or cannot be
    /// parsed at all.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, in practice an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Too few URLs were supplied to build a newsletter.
    #[error("Provide at least {required} URLs (same domain), found {found}")]
    NotEnoughUrls { found: usize, required: usize },

    /// The URLs span more than one hostname.
    ///
    /// `domains` holds every distinct hostname, sorted.
    #[error("All URLs must be from the same domain. Found: {}", domains.join(", "))]
    MixedDomains { domains: Vec<String> },

    /// Every URL failed to fetch or parse.
    #[error("No articles could be fetched/parsed")]
    NoArticles,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Template read or output write failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Context serialisation failure.
    #[error("Failed to serialize context: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for NewsletterError.
pub type Result<T> = std::result::Result<T, NewsletterError>;
