use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::{ArticleRecord, Document};

/// JSON-LD `@type` values treated as an article.
pub const ARTICLE_TYPES: [&str; 3] = ["Article", "NewsArticle", "BlogPosting"];

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Article fields found in a JSON-LD block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredArticle {
    pub headline: String,
    pub description: String,
    pub image: String,
}

impl StructuredArticle {
    fn from_value(value: &Value) -> Self {
        Self {
            headline: string_field(value, "headline"),
            description: string_field(value, "description"),
            image: value.get("image").map(image_url).unwrap_or_default(),
        }
    }
}

/// Extracts an [`ArticleRecord`] from raw markup. Never fails; unresolved fields are empty.
pub fn extract_article(html: &str, url: &str) -> ArticleRecord {
    Document::parse(html).extract_article(url)
}

impl Document {
    /// Extract the article record, each field taking the first non-empty source:
    /// - title: `og:title`, JSON-LD `headline`, `<title>`
    /// - description: `og:description`, `<meta name="description">`, JSON-LD `description`
    /// - image: `og:image`, JSON-LD `image`
    /// - first paragraph: first `<p>` with tags stripped
    pub fn extract_article(&self, url: &str) -> ArticleRecord {
        let mut title = self.meta_property("og:title");
        let mut description = self.meta_property("og:description");
        if description.is_empty() {
            description = self.meta_name("description");
        }
        let mut image = self.meta_property("og:image");

        if let Some(structured) = self.extract_structured_article() {
            fill_if_empty(&mut title, structured.headline);
            fill_if_empty(&mut description, structured.description);
            fill_if_empty(&mut image, structured.image);
        }

        if title.is_empty() {
            title = self.title().unwrap_or_default();
        }

        let record = ArticleRecord {
            url: url.to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            image: image.trim().to_string(),
            first_paragraph: self.first_paragraph_text(),
            blurb: String::new(),
        };

        debug!(
            url,
            title = %record.title,
            has_description = !record.description.is_empty(),
            has_image = !record.image.is_empty(),
            "Extracted article metadata"
        );

        record
    }

    /// First `article`-typed object across all JSON-LD blocks.
    ///
    /// Blocks that fail to parse are skipped. A block may hold one object or an array.
    pub fn extract_structured_article(&self) -> Option<StructuredArticle> {
        let scripts = self.select("script[type=\"application/ld+json\"]").ok()?;

        for script in scripts {
            let value = match serde_json::from_str::<Value>(script.text().trim()) {
                Ok(value) => value,
                Err(e) => {
                    debug!(error = %e, "Skipping unparseable JSON-LD block");
                    continue;
                }
            };

            let candidates = match value {
                Value::Array(items) => items,
                other => vec![other],
            };

            if let Some(candidate) = candidates.iter().find(|c| is_article_type(c)) {
                return Some(StructuredArticle::from_value(candidate));
            }
        }

        None
    }

    /// Plain text of the first `<p>`, with anything shaped like `<...>` removed.
    pub fn first_paragraph_text(&self) -> String {
        match self.select_first("p") {
            Ok(Some(p)) => TAG_PATTERN.replace_all(&p.outer_html(), "").trim().to_string(),
            _ => String::new(),
        }
    }

    /// Content of the first `<meta property="...">` tag, trimmed; empty if missing.
    fn meta_property(&self, property: &str) -> String {
        self.meta_content(&format!("meta[property=\"{}\"]", property))
    }

    /// Content of the first `<meta name="...">` tag, trimmed; empty if missing.
    fn meta_name(&self, name: &str) -> String {
        self.meta_content(&format!("meta[name=\"{}\"]", name))
    }

    fn meta_content(&self, selector: &str) -> String {
        if let Ok(Some(el)) = self.select_first(selector)
            && let Some(content) = el.attr("content")
        {
            return content.trim().to_string();
        }
        String::new()
    }
}

fn fill_if_empty(field: &mut String, fallback: String) {
    if field.is_empty() {
        *field = fallback;
    }
}

/// `@type` may be a single string or an array of strings.
fn is_article_type(candidate: &Value) -> bool {
    match candidate.get("@type") {
        Some(Value::String(t)) => ARTICLE_TYPES.contains(&t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| ARTICLE_TYPES.contains(&t)),
        _ => false,
    }
}

/// String value of `key`, trimmed; empty if missing or not a string.
fn string_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().trim().to_string()
}

/// JSON-LD `image` may be a URL string, an array (first entry wins) or an object with `url`.
fn image_url(image: &Value) -> String {
    match image {
        Value::String(url) => url.trim().to_string(),
        Value::Array(items) => items.first().map(image_url).unwrap_or_default(),
        Value::Object(_) => string_field(image, "url"),
        _ => String::new(),
    }
}
