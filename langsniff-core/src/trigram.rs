//! Trigram extraction and frequency ranking
//!
//! Text is normalized before windowing: ASCII punctuation, digits and
//! symbols (`U+0021..=U+0040`) become spaces, whitespace runs collapse to a
//! single space, and the result is trimmed, lower-cased and padded with one
//! space on each side. All lengths are counted in `char`s.

use indexmap::IndexMap;
use serde::Serialize;

/// A distinct trigram with the number of times it was observed in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrigramTuple {
    /// Three characters of normalized text
    pub trigram: String,
    /// Number of occurrences in the source text
    pub count: u32,
}

impl TrigramTuple {
    /// Create a tuple
    pub fn new(trigram: impl Into<String>, count: u32) -> Self {
        Self {
            trigram: trigram.into(),
            count,
        }
    }
}

/// Byte order mark, treated as whitespace when collapsing
const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[inline]
fn is_folded_to_space(ch: char) -> bool {
    ('\u{21}'..='\u{40}').contains(&ch) || ch == BYTE_ORDER_MARK || ch.is_whitespace()
}

/// Normalize text for trigram extraction, without the outer padding
pub fn normalize(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if is_folded_to_space(ch) {
            pending_space = true;
            continue;
        }
        if pending_space && !collapsed.is_empty() {
            collapsed.push(' ');
        }
        pending_space = false;
        collapsed.push(ch);
    }

    collapsed.to_lowercase()
}

/// Extract every overlapping trigram of the padded, normalized text
///
/// A normalized text of `L` characters (padding included) yields `L - 2`
/// trigrams. Text that normalizes to nothing yields none; any remaining
/// character pads out to at least three.
pub fn extract_trigrams(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut chars: Vec<char> = Vec::with_capacity(normalized.len() + 2);
    chars.push(' ');
    chars.extend(normalized.chars());
    chars.push(' ');

    chars
        .windows(3)
        .map(|window| window.iter().collect())
        .collect()
}

/// Count distinct trigrams and order them ascending by count
///
/// Trigrams with the same count keep the order in which they were first
/// seen; the sort is stable.
pub fn ranked_tuples(text: &str) -> Vec<TrigramTuple> {
    let mut counts: IndexMap<String, u32> = IndexMap::new();
    for trigram in extract_trigrams(text) {
        *counts.entry(trigram).or_insert(0) += 1;
    }

    let mut tuples: Vec<TrigramTuple> = counts
        .into_iter()
        .map(|(trigram, count)| TrigramTuple { trigram, count })
        .collect();
    tuples.sort_by_key(|tuple| tuple.count);
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_punctuation_and_digits() {
        assert_eq!(normalize("Hello, World! 42 times"), "hello world times");
        assert_eq!(normalize("  a\t\tb\n"), "a b");
        assert_eq!(normalize("@#$%"), "");
    }

    #[test]
    fn test_normalize_strips_byte_order_mark() {
        assert_eq!(normalize("\u{FEFF}hi"), "hi");
        assert_eq!(normalize("a\u{FEFF}\u{FEFF}b\u{FEFF}"), "a b");
        assert_eq!(extract_trigrams("\u{FEFF}hi"), vec![" hi", "hi "]);
    }

    #[test]
    fn test_normalize_keeps_symbols_above_range() {
        // '[' is U+005B and stays in the text
        assert_eq!(normalize("a[b"), "a[b");
    }

    #[test]
    fn test_extract_trigrams_basic() {
        let trigrams = extract_trigrams("Hello");
        assert_eq!(trigrams, vec![" he", "hel", "ell", "llo", "lo "]);
    }

    #[test]
    fn test_extract_trigrams_short_input() {
        assert!(extract_trigrams("").is_empty());
        assert!(extract_trigrams("   ").is_empty());
        assert!(extract_trigrams("!!!").is_empty());
        // One character pads out to exactly three
        assert_eq!(extract_trigrams("a"), vec![" a "]);
    }

    #[test]
    fn test_extract_trigrams_non_ascii() {
        let trigrams = extract_trigrams("Привет");
        assert_eq!(trigrams.len(), 6);
        assert_eq!(trigrams[0], " пр");
        assert_eq!(trigrams[5], "ет ");
    }

    #[test]
    fn test_ranked_tuples_order() {
        let tuples = ranked_tuples("aaaa");
        // " aa", "aaa" x2, "aa "
        assert_eq!(
            tuples,
            vec![
                TrigramTuple::new(" aa", 1),
                TrigramTuple::new("aa ", 1),
                TrigramTuple::new("aaa", 2),
            ]
        );
    }

    #[test]
    fn test_ranked_tuples_ties_keep_first_seen_order() {
        let tuples = ranked_tuples("abc");
        let keys: Vec<&str> = tuples.iter().map(|t| t.trigram.as_str()).collect();
        assert_eq!(keys, vec![" ab", "abc", "bc "]);
    }
}
