//! HTML parsing and element lookup.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! article extractor to query meta tags, `<title>`, structured-data scripts and
//! paragraphs with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use newsroll_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><meta property="og:title" content="Headline"></head>
//!         <body><p class="lede">Paragraph</p></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let metas = doc.select(r#"meta[property="og:title"]"#).unwrap();
//! assert_eq!(metas[0].attr("content"), Some("Headline"));
//! ```

use scraper::{Html, Selector};

use crate::{NewsletterError, Result};

/// A parsed HTML document.
///
/// Parsing is lenient: malformed markup still yields a document, so
/// construction never fails.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`NewsletterError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| NewsletterError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|element| Element { element }).collect())
    }

    /// Gets the first element matching a CSS selector.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        Ok(self.select(selector)?.into_iter().next())
    }

    /// Gets the text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        self.select_first("title").ok().flatten().map(|el| el.text())
    }
}

/// A wrapper around scraper's `ElementRef`.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the outer HTML, including this element's own tags.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph <b>2</b></p>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML);
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
        assert_eq!(elements[1].outer_html(), r#"<p class="content">Paragraph <b>2</b></p>"#);
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML);
        let link = doc.select_first("a").unwrap().unwrap();

        assert_eq!(link.attr("href"), Some("https://example.com"));
        assert_eq!(link.attr("rel"), None);
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(NewsletterError::HtmlParseError(_))));
    }

    #[test]
    fn test_missing_title() {
        let doc = Document::parse("<html><body><p>No title here</p></body></html>");
        assert_eq!(doc.title(), None);
    }
}
