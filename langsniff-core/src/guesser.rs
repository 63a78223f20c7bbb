//! High level language guessing
//!
//! [`Guesser`] wraps a [`Detector`] with the language metadata table: it
//! accepts alpha-2 or alpha-3 codes, resolves detection codes to
//! [`LanguageGuess`] records and keeps the training samples needed to
//! replay adaptive training after a rebuild.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::config::Config;
use crate::detector::{DetectOptions, DetectionCandidate, Detector};
use crate::error::Result;
use crate::language::{LanguageEntry, LanguageTable};

/// A detection result resolved to language metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageGuess {
    /// ISO 639-3 code
    pub alpha3: String,
    /// ISO 639-1 code
    pub alpha2: String,
    /// English name
    #[serde(rename = "language")]
    pub name: String,
    /// Similarity in `[0, 1]`
    pub score: f64,
}

impl LanguageGuess {
    fn new(entry: &LanguageEntry, score: f64) -> Self {
        Self {
            alpha3: entry.alpha3.to_string(),
            alpha2: entry.alpha2.to_string(),
            name: entry.name.to_string(),
            score,
        }
    }
}

/// A `(locale, sentence)` pair used for adaptive training
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingSample {
    /// Alpha-2 or alpha-3 code
    pub locale: String,
    /// Sample text
    pub sentence: String,
}

/// Outcome of [`sort_detected_languages`]
#[derive(Debug, Clone, PartialEq)]
pub enum SortedGuesses {
    /// Allowed guesses, best first
    Sorted(Vec<LanguageGuess>),
    /// Nothing was allowed; the first unfiltered guess
    Fallback(LanguageGuess),
    /// Nothing was allowed and there was nothing to fall back to
    Empty,
}

impl SortedGuesses {
    /// Best guess, if any
    pub fn best(&self) -> Option<&LanguageGuess> {
        match self {
            SortedGuesses::Sorted(guesses) => guesses.first(),
            SortedGuesses::Fallback(guess) => Some(guess),
            SortedGuesses::Empty => None,
        }
    }

    /// Flatten into a list
    pub fn into_vec(self) -> Vec<LanguageGuess> {
        match self {
            SortedGuesses::Sorted(guesses) => guesses,
            SortedGuesses::Fallback(guess) => vec![guess],
            SortedGuesses::Empty => Vec::new(),
        }
    }
}

/// Keep the guesses whose alpha-3 code is allowed, best score first
///
/// The sort is stable. When nothing is allowed the first input guess is
/// returned unchanged.
pub fn sort_detected_languages<S: AsRef<str>>(
    guesses: &[LanguageGuess],
    allow_list: &[S],
) -> SortedGuesses {
    let mut allowed: Vec<LanguageGuess> = guesses
        .iter()
        .filter(|guess| allow_list.iter().any(|code| code.as_ref() == guess.alpha3))
        .cloned()
        .collect();

    if allowed.is_empty() {
        return match guesses.first() {
            Some(first) => SortedGuesses::Fallback(first.clone()),
            None => SortedGuesses::Empty,
        };
    }

    allowed.sort_by(|a, b| b.score.total_cmp(&a.score));
    SortedGuesses::Sorted(allowed)
}

/// Language guesser with adaptive training
#[derive(Debug)]
pub struct Guesser {
    detector: Detector,
    languages: LanguageTable,
    samples: Mutex<Vec<TrainingSample>>,
    config: Config,
}

impl Guesser {
    /// Create a guesser over the embedded models and metadata
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a guesser from a configuration
    ///
    /// Extra models are registered first, then the training sentences are
    /// added in order.
    pub fn with_config(config: Config) -> Result<Self> {
        let detector = Detector::with_config(&config)?;
        let guesser = Self {
            detector,
            languages: LanguageTable::default(),
            samples: Mutex::new(Vec::new()),
            config,
        };

        for sample in guesser.config.training() {
            guesser.add_extra_sentence(&sample.locale, &sample.sentence);
        }

        Ok(guesser)
    }

    /// Create a guesser from its parts
    pub fn with_parts(detector: Detector, languages: LanguageTable, config: Config) -> Self {
        Self {
            detector,
            languages,
            samples: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Guess the language of a text
    ///
    /// `allow_list` takes alpha-2 or alpha-3 codes; when empty the
    /// configured allow list applies. Results without metadata (script
    /// identifiers, `und`) are skipped. `limit` falls back to the configured
    /// limit; `None` returns every guess.
    pub fn guess<S: AsRef<str>>(
        &self,
        text: &str,
        allow_list: &[S],
        limit: Option<usize>,
    ) -> Vec<LanguageGuess> {
        let candidates = self.detect(text, allow_list);
        let limit = limit.or(self.config.limit()).filter(|&limit| limit > 0);

        let mut guesses = Vec::new();
        for DetectionCandidate { code, score } in candidates {
            let Some(entry) = self.languages.by_alpha3(&code) else {
                continue;
            };
            guesses.push(LanguageGuess::new(entry, score));
            if limit.is_some_and(|limit| guesses.len() >= limit) {
                break;
            }
        }
        guesses
    }

    /// Best guess for a text, if any
    pub fn guess_best<S: AsRef<str>>(&self, text: &str, allow_list: &[S]) -> Option<LanguageGuess> {
        self.guess(text, allow_list, Some(1)).into_iter().next()
    }

    /// Raw detector candidates for a text, including script identifiers
    pub fn detect<S: AsRef<str>>(&self, text: &str, allow_list: &[S]) -> Vec<DetectionCandidate> {
        let char_len = text.chars().count();
        let min_length = char_len.min(self.config.min_length());

        let allow_list = if allow_list.is_empty() {
            self.transform_allow_list(self.config.allow_list())
        } else {
            self.transform_allow_list(allow_list)
        };

        let options = DetectOptions {
            min_length,
            allow_list: (!allow_list.is_empty()).then_some(allow_list),
        };
        self.detector.detect_all(text, &options)
    }

    /// Normalize codes to alpha-3
    ///
    /// Three-character codes are kept as is, known alpha-2 codes are
    /// mapped, anything else is dropped.
    pub fn transform_allow_list<S: AsRef<str>>(&self, codes: &[S]) -> Vec<String> {
        codes
            .iter()
            .filter_map(|code| {
                let code = code.as_ref();
                if code.chars().count() == 3 {
                    Some(code.to_string())
                } else {
                    self.languages
                        .by_alpha2(code)
                        .map(|entry| entry.alpha3.to_string())
                }
            })
            .collect()
    }

    /// Train the model of `locale` with the trigrams of `sentence`
    ///
    /// Returns whether the sentence's script has models to train.
    pub fn add_trigrams(&self, locale: &str, sentence: &str) -> bool {
        let code = self.languages.resolve_alpha3(locale);
        self.detector.add_trigrams(code, sentence)
    }

    /// Record a training sample and apply it
    pub fn add_extra_sentence(&self, locale: &str, sentence: &str) -> bool {
        self.lock_samples().push(TrainingSample {
            locale: locale.to_string(),
            sentence: sentence.to_string(),
        });
        self.add_trigrams(locale, sentence)
    }

    /// Re-apply every recorded training sample in order
    pub fn process_extra_sentences(&self) {
        let samples = self.training_samples();
        log::debug!("replaying {} training samples", samples.len());
        for sample in &samples {
            self.add_trigrams(&sample.locale, &sample.sentence);
        }
    }

    /// Recorded training samples
    pub fn training_samples(&self) -> Vec<TrainingSample> {
        self.lock_samples().clone()
    }

    /// Compile and register a model, replacing an existing one
    pub fn add_model(&self, script: &str, code: &str, ranks: &str) -> Result<()> {
        self.detector.add_model(script, code, ranks)
    }

    /// Recompile every model and replay the training samples
    pub fn rebuild_models(&self) {
        self.detector.build_all_models();
        self.process_extra_sentences();
    }

    /// Underlying detector
    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Language metadata
    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock_samples(&self) -> MutexGuard<'_, Vec<TrainingSample>> {
        self.samples.lock().unwrap_or_else(|poisoned| {
            log::warn!("training sample lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
