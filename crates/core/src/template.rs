//! Literal `{{KEY}}` placeholder substitution.
//!
//! The template is treated as plain text, never parsed as HTML. Every
//! `{{KEY}}` token whose key is in the context is replaced in a single pass, so
//! substituted values are never scanned again. Tokens without a matching key
//! are left as they are.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Context;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Placeholder token for `key`, e.g. `{{MAIN_TITLE}}`.
pub fn placeholder(key: &str) -> String {
    format!("{{{{{}}}}}", key)
}

/// Substitute every context key into `template`.
pub fn render(template: &str, context: &Context) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| match context.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholders present in `template` with no value in `context`, in order of first appearance.
pub fn unresolved_placeholders(template: &str, context: &Context) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();

    for caps in TOKEN_PATTERN.captures_iter(template) {
        let key = &caps[1];
        if context.get(key).is_none() && !missing.iter().any(|m| m == key) {
            missing.push(key.to_string());
        }
    }

    missing
}
