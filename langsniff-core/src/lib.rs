//! Trigram language identification
//!
//! This crate guesses the natural language of short texts from two kinds of
//! evidence: the dominant Unicode writing script and the rank distance
//! between the text's trigram profile and per-language trigram models.
//!
//! # Architecture
//!
//! - **trigram**: normalization, sliding windows and ranked tuples
//! - **script**: dominant script classification over code point tables
//! - **model**: rank models and the `script -> language -> model` registry
//! - **distance**: rank distance and allow/deny filtering
//! - **detector**: the detection pipeline over a locked registry
//! - **guesser**: metadata resolution and adaptive training
//!
//! # Example
//!
//! ```rust
//! use langsniff_core::Guesser;
//!
//! let guesser = Guesser::new().unwrap();
//!
//! let best = guesser.guess_best("Hello World", &["en", "fr"]).unwrap();
//! assert_eq!(best.alpha3, "eng");
//! assert_eq!(best.name, "English");
//!
//! // Scripts without trigram models are identified by script alone
//! let thai = guesser.guess_best("ภาษาไทยเป็นภาษาที่สวยงาม", &[] as &[&str]).unwrap();
//! assert_eq!(thai.alpha3, "tha");
//! ```

pub mod config;
pub mod detector;
pub mod distance;
pub mod error;
pub mod guesser;
pub mod language;
pub mod model;
pub mod script;
pub mod trigram;

pub use config::{Config, ConfigBuilder, ModelSpec, TrainingSpec};
pub use detector::{DetectOptions, DetectionCandidate, Detector};
pub use error::{LangsniffError, Result};
pub use guesser::{sort_detected_languages, Guesser, LanguageGuess, SortedGuesses, TrainingSample};
pub use language::{LanguageEntry, LanguageTable};
pub use model::{LanguageModels, ModelRegistry, RankModel};
pub use script::{classify_script, Script, ScriptMatch, UNDETERMINED};
pub use trigram::{extract_trigrams, ranked_tuples, TrigramTuple};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Detector>();
        assert_send_sync::<Guesser>();
        assert_send_sync::<ModelRegistry>();
        assert_send_sync::<LanguageTable>();
    }
}
