//! Single-site validation for the input URL list.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::{NewsletterError, Result};

static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://([^/]+)").unwrap());

/// Hostname of a URL: everything after `http://` or `https://` up to the next `/`.
///
/// Ports and credentials stay part of the hostname; no further parsing is done.
pub fn hostname(url: &str) -> Result<&str> {
    HOST_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NewsletterError::InvalidUrl(format!("{} (expected an http:// or https:// URL)", url)))
}

/// Check that every URL shares one hostname and return it.
///
/// # Errors
///
/// - [`NewsletterError::MixedDomains`] with the distinct hostnames, sorted
/// - [`NewsletterError::InvalidUrl`] for a URL without an http(s) prefix
/// - [`NewsletterError::NotEnoughUrls`] for an empty list
pub fn ensure_same_domain<S: AsRef<str>>(urls: &[S]) -> Result<String> {
    let hosts = urls.iter().map(|u| hostname(u.as_ref())).collect::<Result<Vec<_>>>()?;
    let distinct: BTreeSet<&str> = hosts.iter().copied().collect();

    match distinct.len() {
        0 => Err(NewsletterError::NotEnoughUrls { found: 0, required: 1 }),
        1 => Ok(hosts[0].to_string()),
        _ => Err(NewsletterError::MixedDomains { domains: distinct.into_iter().map(str::to_string).collect() }),
    }
}
