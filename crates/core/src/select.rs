//! Ranking and partitioning of extracted articles.
//!
//! Articles are ranked by the character length of their display text (the raw
//! description, else the first paragraph) so the richest story leads the issue.
//! The sort is stable: equal lengths keep fetch order.

use crate::{ArticleRecord, NewsletterError, Result};

/// Number of entries in the quick-links and recommended lists.
pub const LIST_LEN: usize = 3;

/// Ranked partitions of the surviving articles.
///
/// `quick_links` and `recommended` both cover ranks 1 to 3 of the full
/// ranking, so they always have the same members. Templates may use either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Rank 0.
    pub main: &'a ArticleRecord,
    /// Ranks 1 and onwards.
    pub secondary: Vec<&'a ArticleRecord>,
    /// First three of `secondary`.
    pub quick_links: Vec<&'a ArticleRecord>,
    /// Ranks 1 to 3 of the full ranking.
    pub recommended: Vec<&'a ArticleRecord>,
}

/// Order `items` by display-text length, longest first.
pub fn rank(items: &[ArticleRecord]) -> Vec<&ArticleRecord> {
    let mut ranked: Vec<&ArticleRecord> = items.iter().collect();
    ranked.sort_by_key(|item| std::cmp::Reverse(item.rank_len()));
    ranked
}

/// Pick the main story and the supporting lists.
///
/// # Errors
///
/// Returns [`NewsletterError::NoArticles`] when `items` is empty.
pub fn select(items: &[ArticleRecord]) -> Result<Selection<'_>> {
    let ranked = rank(items);
    let (&main, secondary) = ranked.split_first().ok_or(NewsletterError::NoArticles)?;

    let quick_links = secondary.iter().take(LIST_LEN).copied().collect();
    let recommended = ranked.iter().skip(1).take(LIST_LEN).copied().collect();

    Ok(Selection { main, secondary: secondary.to_vec(), quick_links, recommended })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str, description: &str) -> ArticleRecord {
        ArticleRecord { description: description.to_string(), ..ArticleRecord::new(url) }
    }

    fn urls(items: &[&ArticleRecord]) -> Vec<String> {
        items.iter().map(|i| i.url.clone()).collect()
    }

    #[test]
    fn test_select_empty_fails() {
        assert!(matches!(select(&[]), Err(NewsletterError::NoArticles)));
    }

    #[test]
    fn test_single_item() {
        let items = vec![item("a", "only")];
        let selection = select(&items).unwrap();

        assert_eq!(selection.main.url, "a");
        assert!(selection.secondary.is_empty());
        assert!(selection.quick_links.is_empty());
        assert!(selection.recommended.is_empty());
    }

    #[test]
    fn test_longest_text_is_main() {
        let items = vec![item("a", "Short."), item("b", &"z".repeat(300)), item("c", "Medium text")];
        let selection = select(&items).unwrap();

        assert_eq!(selection.main.url, "b");
        assert_eq!(urls(&selection.secondary), vec!["c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![item("a", "same"), item("b", "four"), item("c", "tie!"), item("d", "longer")];
        let selection = select(&items).unwrap();

        assert_eq!(selection.main.url, "d");
        assert_eq!(urls(&selection.secondary), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_paragraph_used_when_description_empty() {
        let mut with_paragraph = item("a", "");
        with_paragraph.first_paragraph = "A much longer first paragraph".to_string();
        let items = vec![item("b", "desc"), with_paragraph];

        assert_eq!(select(&items).unwrap().main.url, "a");
    }

    #[test]
    fn test_ranking_ignores_blurb() {
        let mut long = item("long", &"w ".repeat(200));
        long.blurb = "tiny".to_string();
        let mut short = item("short", "a short description");
        short.blurb = "x".repeat(220);
        let items = vec![short, long];

        assert_eq!(select(&items).unwrap().main.url, "long");
    }

    #[test]
    fn test_quick_links_and_recommended_match() {
        let items: Vec<ArticleRecord> =
            (0..6).map(|i| item(&format!("u{}", i), &"d".repeat(10 - i))).collect();
        let selection = select(&items).unwrap();

        assert_eq!(selection.secondary.len(), 5);
        assert_eq!(urls(&selection.quick_links), vec!["u1", "u2", "u3"]);
        assert_eq!(selection.quick_links, selection.recommended);
    }

    #[test]
    fn test_secondary_is_non_increasing() {
        let items: Vec<ArticleRecord> = ["abc", "a", "abcdef", "ab", "abcd"]
            .iter()
            .enumerate()
            .map(|(i, d)| item(&i.to_string(), d))
            .collect();
        let selection = select(&items).unwrap();

        assert_eq!(selection.secondary.len(), items.len() - 1);
        assert!(selection.secondary.windows(2).all(|w| w[0].rank_len() >= w[1].rank_len()));
        assert!(selection.secondary.iter().all(|s| s.rank_len() <= selection.main.rank_len()));
    }
}
