//! Language detection over a locked model registry
//!
//! A [`Detector`] owns its [`ModelRegistry`] behind an [`RwLock`]. Detection
//! holds a read guard for the whole scoring pass so it always sees one
//! consistent snapshot; training and model registration take the write
//! guard.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::config::{defaults, Config};
use crate::distance::{rank_distances, UNKNOWN_TRIGRAM_PENALTY};
use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::error::LangsniffError;
use crate::model::ModelRegistry;
use crate::script::{classify_script, Script, ScriptMatch, UNDETERMINED};
use crate::trigram::{extract_trigrams, ranked_tuples};

/// A scored detection result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionCandidate {
    /// Alpha-3 language code, script identifier, or `und`
    pub code: String,
    /// Similarity in `[0, 1]`, higher is better
    pub score: f64,
}

impl DetectionCandidate {
    /// Create a candidate
    pub fn new(code: impl Into<String>, score: f64) -> Self {
        Self {
            code: code.into(),
            score,
        }
    }

    /// The `und` sentinel with score 1
    pub fn undetermined() -> Self {
        Self::new(UNDETERMINED, 1.0)
    }

    /// Whether this is the `und` sentinel
    pub fn is_undetermined(&self) -> bool {
        self.code == UNDETERMINED
    }
}

/// Per-call detection options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Texts shorter than this many chars are undetermined
    pub min_length: usize,
    /// Alpha-3 codes (or script identifiers) to restrict the result to
    pub allow_list: Option<Vec<String>>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            allow_list: None,
        }
    }
}

impl DetectOptions {
    /// Set the minimum text length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Restrict results to the given codes
    pub fn with_allow_list<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = Some(codes.into_iter().map(Into::into).collect());
        self
    }
}

/// Trigram language detector
#[derive(Debug)]
pub struct Detector {
    registry: RwLock<ModelRegistry>,
    max_chars: usize,
    deny_list: Vec<String>,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    threads: Option<usize>,
}

impl Detector {
    /// Create a detector over the embedded models
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(ModelRegistry::embedded()?))
    }

    /// Create a detector over an explicit registry
    pub fn with_registry(registry: ModelRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            max_chars: defaults::MAX_CHARS,
            deny_list: Vec::new(),
            threads: None,
        }
    }

    /// Create a detector over the embedded models plus the configured extras
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut registry = ModelRegistry::embedded()?;
        for spec in config.extra_models() {
            registry.add_model(&spec.script, &spec.code, &spec.ranks)?;
        }

        Ok(Self {
            registry: RwLock::new(registry),
            max_chars: config.max_chars(),
            deny_list: config.deny_list().to_vec(),
            threads: config.threads(),
        })
    }

    /// Detect the language of a text, best candidate first
    ///
    /// Never fails: texts that are empty or shorter than
    /// `options.min_length` yield the `und` sentinel. Scripts without models
    /// are reported by their script identifier with score 1.
    pub fn detect_all(&self, text: &str, options: &DetectOptions) -> Vec<DetectionCandidate> {
        let char_len = text.chars().count();
        if text.is_empty() || char_len < options.min_length {
            return vec![DetectionCandidate::undetermined()];
        }

        let (text, char_len) = truncate_chars(text, char_len, self.max_chars);
        let script = classify_script(text);
        let allow_list = options.allow_list.as_deref();

        let registry = self.read_registry();
        let Some(models) = registry.models(script.id()) else {
            return unmodeled_script(&script, allow_list);
        };

        let tuples = ranked_tuples(text);
        let distances = rank_distances(
            &tuples,
            models,
            allow_list.unwrap_or(&[]),
            &self.deny_list,
        );
        if distances[0].0 == UNDETERMINED {
            return vec![DetectionCandidate::new(script.id(), 1.0)];
        }

        let min = distances[0].1 as f64;
        let max = char_len as f64 * UNKNOWN_TRIGRAM_PENALTY as f64 - min;
        log::trace!(
            "scored {} candidates under {} (best distance {})",
            distances.len(),
            script.id(),
            min
        );

        distances
            .into_iter()
            .map(|(code, distance)| {
                // Every candidate is as far as possible: nothing to normalize
                let score = if max > 0.0 {
                    (1.0 - (distance as f64 - min) / max).max(0.0)
                } else {
                    0.0
                };
                DetectionCandidate::new(code, score)
            })
            .collect()
    }

    /// Detect many texts, results in input order
    pub fn detect_batch<S>(
        &self,
        texts: &[S],
        options: &DetectOptions,
    ) -> Result<Vec<Vec<DetectionCandidate>>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads.unwrap_or_else(num_cpus::get))
                .thread_name(|i| format!("langsniff-worker-{i}"))
                .build()
                .map_err(|e| LangsniffError::Parallel(e.to_string()))?;

            Ok(pool.install(|| {
                texts
                    .par_iter()
                    .map(|text| self.detect_all(text.as_ref(), options))
                    .collect()
            }))
        }

        #[cfg(not(feature = "parallel"))]
        {
            Ok(texts
                .iter()
                .map(|text| self.detect_all(text.as_ref(), options))
                .collect())
        }
    }

    /// Add every trigram of `sentence` to the model of `code` with rank 1
    ///
    /// The model is created when missing, but only under a script the
    /// registry already knows. Returns whether anything was added.
    pub fn add_trigrams(&self, code: &str, sentence: &str) -> bool {
        let script = classify_script(sentence);
        let trigrams = extract_trigrams(sentence);

        let mut registry = self.write_registry();
        let Some(model) = registry.model_entry(script.id(), code) else {
            log::debug!(
                "ignoring training sentence for {code}: no models for script {}",
                script.id()
            );
            return false;
        };

        for trigram in &trigrams {
            model.set(trigram.as_str(), 1);
        }
        log::debug!(
            "trained {}/{code} with {} trigrams",
            script.id(),
            trigrams.len()
        );
        true
    }

    /// Compile and register a model, replacing an existing one
    pub fn add_model(&self, script: &str, code: &str, ranks: &str) -> Result<()> {
        self.write_registry().add_model(script, code, ranks)
    }

    /// Recompile every model from its raw data, dropping trained trigrams
    pub fn build_all_models(&self) {
        self.write_registry().build_all_models();
    }

    /// Read access to the registry
    pub fn registry(&self) -> RwLockReadGuard<'_, ModelRegistry> {
        self.read_registry()
    }

    /// Truncation limit in chars
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, ModelRegistry> {
        self.registry.read().unwrap_or_else(|poisoned| {
            log::warn!("model registry lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, ModelRegistry> {
        self.registry.write().unwrap_or_else(|poisoned| {
            log::warn!("model registry lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

/// Cut `text` to its first `max_chars` chars
fn truncate_chars(text: &str, char_len: usize, max_chars: usize) -> (&str, usize) {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => (&text[..end], max_chars),
        None => (text, char_len),
    }
}

/// Result for a script the registry has no models for
fn unmodeled_script(script: &ScriptMatch, allow_list: Option<&[String]>) -> Vec<DetectionCandidate> {
    let id = script.id();

    // Han text is reported as Japanese when only Japanese is allowed
    if script.ratio > 0.5 && script.script == Some(Script::Han) {
        if let Some(allow) = allow_list {
            let allowed = |code: &str| allow.iter().any(|entry| entry == code);
            if !allowed(id) && allowed("jpn") {
                return vec![DetectionCandidate::new("jpn", 1.0)];
            }
        }
    }

    vec![DetectionCandidate::new(id, 1.0)]
}
