use std::sync::LazyLock;

use regex::Regex;

use crate::ArticleRecord;

/// Default blurb budget in characters.
pub const DEFAULT_BLURB_LEN: usize = 220;

const ELLIPSIS: char = '…';

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derive a display blurb of at most `max_len` characters.
///
/// Uses the description, else the first paragraph. Whitespace runs collapse to
/// one space; text over budget is cut to `max_len - 1` characters, right-trimmed,
/// and ends with `…`.
pub fn summarize(record: &ArticleRecord, max_len: usize) -> String {
    clamp_text(record.display_text(), max_len)
}

/// Collapse whitespace and clamp `text` to `max_len` characters.
pub fn clamp_text(text: &str, max_len: usize) -> String {
    let text = WHITESPACE_RUN.replace_all(text, " ");
    let text = text.trim();

    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut clamped: String = text.chars().take(max_len.saturating_sub(1)).collect();
    clamped.truncate(clamped.trim_end().len());
    clamped.push(ELLIPSIS);
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(description: &str, first_paragraph: &str) -> ArticleRecord {
        ArticleRecord {
            description: description.to_string(),
            first_paragraph: first_paragraph.to_string(),
            ..ArticleRecord::new("https://news.example/a")
        }
    }

    #[rstest]
    #[case::description("Short.", "Ignored paragraph", "Short.")]
    #[case::paragraph("", "Paragraph only", "Paragraph only")]
    #[case::neither("", "", "")]
    #[case::whitespace("  line one\n\n\tline   two  ", "", "line one line two")]
    fn test_summarize_sources(#[case] description: &str, #[case] paragraph: &str, #[case] expected: &str) {
        assert_eq!(summarize(&record(description, paragraph), DEFAULT_BLURB_LEN), expected);
    }

    #[test]
    fn test_long_text_is_clamped_with_ellipsis() {
        let long = "x".repeat(300);
        let blurb = summarize(&record(&long, ""), DEFAULT_BLURB_LEN);

        assert_eq!(blurb.chars().count(), DEFAULT_BLURB_LEN);
        assert!(blurb.ends_with(ELLIPSIS));
        assert!(blurb.starts_with(&"x".repeat(219)));
    }

    #[test]
    fn test_exact_budget_is_untouched() {
        let exact = "y".repeat(DEFAULT_BLURB_LEN);
        assert_eq!(clamp_text(&exact, DEFAULT_BLURB_LEN), exact);
    }

    #[test]
    fn test_trailing_space_trimmed_before_ellipsis() {
        assert_eq!(clamp_text("abcd efgh", 6), "abcd…");
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let clamped = clamp_text(&text, 5);
        assert_eq!(clamped, "éééé…");
    }

    #[test]
    fn test_summarize_is_idempotent_on_short_text() {
        let once = clamp_text("  Already   short\ttext ", 50);
        assert_eq!(clamp_text(&once, 50), once);
    }

    #[test]
    fn test_never_exceeds_budget() {
        for max_len in 0..40 {
            let out = clamp_text("The quick brown fox jumps over the lazy dog", max_len);
            assert!(out.chars().count() <= max_len, "max_len {} gave {:?}", max_len, out);
        }
    }
}
