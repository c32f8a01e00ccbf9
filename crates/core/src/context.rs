//! Template context: the flat key → string mapping substituted into templates.
//!
//! [`Context::from_selection`] fills every key a newsletter template can use.
//! Missing list slots become empty strings so the matching placeholders
//! disappear from the output instead of leaking through.
//!
//! | Key | Value |
//! |-----|-------|
//! | `NEWSLETTER_TITLE` | `This Week on <hostname>` |
//! | `NEWSLETTER_SUBTITLE` | always empty |
//! | `MAIN_IMAGE_URL` | main image, else `https://<hostname>/favicon.ico` |
//! | `MAIN_URL`, `MAIN_TITLE`, `MAIN_SUMMARY` | main story |
//! | `S{n}_URL`, `S{n}_TITLE`, `S{n}_BLURB` | secondary stories 1-3 |
//! | `Q{n}_URL`, `Q{n}_TITLE` | quick links 1-3 |
//! | `R{n}_URL`, `R{n}_TITLE` | recommended 1-3 |
//! | `BRAND_NAME` | hostname |
//! | `YEAR` | `2025` |
//! | `ADDRESS_LINE` | `—` |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::select::{LIST_LEN, Selection};
use crate::{ArticleRecord, Result};

pub const YEAR: &str = "2025";
pub const ADDRESS_LINE: &str = "—";

/// Ordered key → value mapping for template placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full newsletter context for a ranked selection.
    pub fn from_selection(hostname: &str, selection: &Selection<'_>) -> Self {
        let main = selection.main;
        let main_image = if main.image.is_empty() {
            format!("https://{}/favicon.ico", hostname)
        } else {
            main.image.clone()
        };

        let mut ctx = Self::new();
        ctx.insert("NEWSLETTER_TITLE", format!("This Week on {}", hostname));
        ctx.insert("NEWSLETTER_SUBTITLE", "");
        ctx.insert("MAIN_IMAGE_URL", main_image);
        ctx.insert("MAIN_URL", main.url.as_str());
        ctx.insert("MAIN_TITLE", main.title.as_str());
        ctx.insert("MAIN_SUMMARY", main.blurb.as_str());

        for n in 0..LIST_LEN {
            let secondary = selection.secondary.get(n).copied();
            ctx.insert(format!("S{}_URL", n + 1), field(secondary, |a| &a.url));
            ctx.insert(format!("S{}_TITLE", n + 1), field(secondary, |a| &a.title));
            ctx.insert(format!("S{}_BLURB", n + 1), field(secondary, |a| &a.blurb));

            let quick = selection.quick_links.get(n).copied();
            ctx.insert(format!("Q{}_URL", n + 1), field(quick, |a| &a.url));
            ctx.insert(format!("Q{}_TITLE", n + 1), field(quick, |a| &a.title));

            let recommended = selection.recommended.get(n).copied();
            ctx.insert(format!("R{}_URL", n + 1), field(recommended, |a| &a.url));
            ctx.insert(format!("R{}_TITLE", n + 1), field(recommended, |a| &a.title));
        }

        ctx.insert("BRAND_NAME", hostname);
        ctx.insert("YEAR", YEAR);
        ctx.insert("ADDRESS_LINE", ADDRESS_LINE);
        ctx
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty-printed JSON object of all keys.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

fn field(article: Option<&ArticleRecord>, get: impl Fn(&ArticleRecord) -> &String) -> String {
    article.map(|a| get(a).clone()).unwrap_or_default()
}
