//! Trigram rank models
//!
//! A language model is an ordered list of its characteristic trigrams,
//! serialized either as a `|`-delimited string or as consecutive
//! three-character chunks. Compiling it assigns descending ranks in list
//! order: the first token gets `len - 1`, the last token gets 0.

pub mod registry;

use indexmap::IndexMap;

use crate::error::{LangsniffError, Result};

pub use registry::{LanguageModels, ModelRegistry};

/// Separator between trigrams in delimited rank strings
pub const TOKEN_SEPARATOR: char = '|';

/// Compiled `trigram -> rank` map for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankModel {
    ranks: IndexMap<String, u32>,
}

impl RankModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank of a trigram, if the model knows it
    #[inline]
    pub fn rank(&self, trigram: &str) -> Option<u32> {
        self.ranks.get(trigram).copied()
    }

    /// Whether the model knows a trigram
    pub fn contains(&self, trigram: &str) -> bool {
        self.ranks.contains_key(trigram)
    }

    /// Set the rank of a trigram, replacing any previous value
    pub fn set(&mut self, trigram: impl Into<String>, rank: u32) {
        self.ranks.insert(trigram.into(), rank);
    }

    /// Number of trigrams in the model
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the model has no trigrams
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate trigrams and ranks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranks.iter().map(|(trigram, rank)| (trigram.as_str(), *rank))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for RankModel {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(trigram, rank)| (trigram.into(), rank))
                .collect(),
        }
    }
}

/// Split a raw rank string into trigram tokens
///
/// Delimited strings are split on `|`. Anything else is cut into
/// consecutive three-character chunks; a trailing chunk shorter than three
/// characters is kept as is.
pub fn split_tokens(raw: &str) -> Vec<String> {
    if raw.contains(TOKEN_SEPARATOR) {
        return raw.split(TOKEN_SEPARATOR).map(str::to_string).collect();
    }

    let chars: Vec<char> = raw.chars().collect();
    chars.chunks(3).map(|chunk| chunk.iter().collect()).collect()
}

/// Compile tokens into a rank model
///
/// Ranks descend from `len - 1` to 0 in token order. A repeated token keeps
/// the rank of its last occurrence.
pub fn compile_model<S: AsRef<str>>(tokens: &[S]) -> RankModel {
    let mut model = RankModel::new();
    let mut rank = tokens.len() as u32;

    for token in tokens {
        rank -= 1;
        model.set(token.as_ref(), rank);
    }

    model
}

/// Reject chunked rank strings whose length is not a multiple of three
pub fn validate_rank_string(script: &str, code: &str, raw: &str) -> Result<()> {
    if raw.contains(TOKEN_SEPARATOR) {
        return Ok(());
    }

    let len = raw.chars().count();
    if len % 3 != 0 {
        return Err(LangsniffError::MalformedModel {
            script: script.to_string(),
            code: code.to_string(),
            reason: format!("length {len} is not a multiple of 3"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens_delimited() {
        assert_eq!(split_tokens(" th|the|he "), vec![" th", "the", "he "]);
    }

    #[test]
    fn test_split_tokens_chunked() {
        assert_eq!(split_tokens(" ththehe "), vec![" th", "the", "he "]);
        assert_eq!(split_tokens("свет"), vec!["све", "т"]);
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_compile_model_ranks_descend() {
        let model = compile_model(&split_tokens("aaa|bbb|ccc"));
        assert_eq!(model.rank("aaa"), Some(2));
        assert_eq!(model.rank("bbb"), Some(1));
        assert_eq!(model.rank("ccc"), Some(0));
        assert_eq!(model.rank("ddd"), None);
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn test_compile_model_duplicate_keeps_later_rank() {
        let model = compile_model(&["aaa", "bbb", "aaa"]);
        assert_eq!(model.rank("aaa"), Some(0));
        assert_eq!(model.rank("bbb"), Some(1));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_compile_empty() {
        let tokens: Vec<String> = Vec::new();
        assert!(compile_model(&tokens).is_empty());
    }

    #[test]
    fn test_validate_rank_string() {
        assert!(validate_rank_string("Latin", "eng", "abcdef").is_ok());
        assert!(validate_rank_string("Latin", "eng", "ab|cdef").is_ok());
        assert!(validate_rank_string("Latin", "eng", "").is_ok());

        let err = validate_rank_string("Latin", "eng", "abcd").unwrap_err();
        assert!(matches!(err, LangsniffError::MalformedModel { .. }));
        assert!(err.to_string().contains("Latin/eng"));
    }

    #[test]
    fn test_rank_model_from_iter() {
        let model: RankModel = [(" he", 1), ("hel", 2)].into_iter().collect();
        assert_eq!(model.rank("hel"), Some(2));
        assert!(model.contains(" he"));
        let keys: Vec<&str> = model.iter().map(|(t, _)| t).collect();
        assert_eq!(keys, vec![" he", "hel"]);
    }
}
