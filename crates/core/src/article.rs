//! Article record produced for each successfully fetched URL.
//!
//! This module defines the [`ArticleRecord`] struct: the normalised
//! title/description/image/first-paragraph data the newsletter is built from.

use serde::Serialize;

use crate::blurb::{DEFAULT_BLURB_LEN, summarize};

/// Best-effort metadata for one article page.
///
/// `url` is always non-empty. Every other field may legitimately be empty
/// but is never absent; consumers treat `""` as "not available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// Source URL the markup was fetched from.
    pub url: String,

    /// Page title (`og:title`, JSON-LD `headline`, then `<title>`).
    pub title: String,

    /// Page description (`og:description`, `<meta name="description">`, then JSON-LD).
    pub description: String,

    /// Representative image URL (`og:image`, then JSON-LD `image`).
    pub image: String,

    /// Tag-stripped text of the first `<p>` element.
    pub first_paragraph: String,

    /// Short display summary, filled in after extraction.
    pub blurb: String,
}

impl ArticleRecord {
    /// Creates a record with only its URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Default::default() }
    }

    /// Text used both for blurbs and for ranking: the description, else the first paragraph.
    pub fn display_text(&self) -> &str {
        if self.description.is_empty() { &self.first_paragraph } else { &self.description }
    }

    /// Ranking key for selection, measured in characters before any truncation.
    pub fn rank_len(&self) -> usize {
        self.display_text().chars().count()
    }

    /// Returns the record with its blurb derived at `max_len` characters.
    pub fn with_blurb(mut self, max_len: usize) -> Self {
        self.blurb = summarize(&self, max_len);
        self
    }

    /// Returns the record with the default 220-character blurb.
    pub fn summarized(self) -> Self {
        self.with_blurb(DEFAULT_BLURB_LEN)
    }
}
