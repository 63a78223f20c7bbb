//! Output formatting module

use anyhow::Result;
use langsniff_core::{DetectionCandidate, LanguageGuess};
use serde::Serialize;

/// Detection results for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Matches {
    /// Guesses resolved to language metadata
    Guesses(Vec<LanguageGuess>),
    /// Raw detector candidates, script identifiers included
    Candidates(Vec<DetectionCandidate>),
}

/// One displayable result line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRow<'a> {
    /// Alpha-3 code or script identifier
    pub code: &'a str,
    /// Language name, when known
    pub name: Option<&'a str>,
    /// Similarity in `[0, 1]`
    pub score: f64,
}

impl Matches {
    /// Flatten into display rows
    pub fn rows(&self) -> Vec<MatchRow<'_>> {
        match self {
            Matches::Guesses(guesses) => guesses
                .iter()
                .map(|g| MatchRow {
                    code: &g.alpha3,
                    name: Some(&g.name),
                    score: g.score,
                })
                .collect(),
            Matches::Candidates(candidates) => candidates
                .iter()
                .map(|c| MatchRow {
                    code: &c.code,
                    name: None,
                    score: c.score,
                })
                .collect(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the results of one input
    fn format_matches(&mut self, source: &str, matches: &Matches) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use super::Matches;
    use langsniff_core::{DetectionCandidate, LanguageGuess};

    pub fn guesses() -> Matches {
        Matches::Guesses(vec![
            LanguageGuess {
                alpha3: "eng".to_string(),
                alpha2: "en".to_string(),
                name: "English".to_string(),
                score: 1.0,
            },
            LanguageGuess {
                alpha3: "fra".to_string(),
                alpha2: "fr".to_string(),
                name: "French".to_string(),
                score: 0.25,
            },
        ])
    }

    pub fn candidates() -> Matches {
        Matches::Candidates(vec![DetectionCandidate::new("Latin", 1.0)])
    }
}
