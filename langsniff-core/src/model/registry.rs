//! Model registry: `script -> language code -> RankModel`
//!
//! The registry keeps the raw rank string of every model next to its
//! compiled form so the whole registry can be recompiled, which also drops
//! anything added by training. Both levels are insertion ordered; the order
//! in which languages are scored decides ties.

use std::sync::OnceLock;

use indexmap::IndexMap;

use super::{compile_model, split_tokens, validate_rank_string, RankModel};
use crate::error::{LangsniffError, Result};
use crate::script::Script;

/// Compiled models of one script, keyed by language code
pub type LanguageModels = IndexMap<String, RankModel>;

type RawModels = IndexMap<String, IndexMap<String, String>>;

static EMBEDDED_MODELS: &str = include_str!("../../data/models.toml");
static EMBEDDED_RAW: OnceLock<RawModels> = OnceLock::new();

fn parse_raw(source: &str) -> Result<RawModels> {
    toml::from_str(source).map_err(|e| LangsniffError::ModelData(e.to_string()))
}

fn embedded_raw() -> Result<&'static RawModels> {
    if let Some(raw) = EMBEDDED_RAW.get() {
        return Ok(raw);
    }
    let parsed = parse_raw(EMBEDDED_MODELS)?;
    Ok(EMBEDDED_RAW.get_or_init(|| parsed))
}

/// Registry of compiled language models grouped by script
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    raw: RawModels,
    compiled: IndexMap<String, LanguageModels>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from the models embedded in the crate
    pub fn embedded() -> Result<Self> {
        Self::from_raw(embedded_raw()?.clone())
    }

    /// Create a registry from TOML with one table per script
    ///
    /// ```toml
    /// [Latin]
    /// eng = " th|the|he "
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_raw(parse_raw(source)?)
    }

    fn from_raw(raw: RawModels) -> Result<Self> {
        for (script, languages) in &raw {
            script.parse::<Script>()?;
            for (code, ranks) in languages {
                validate_rank_string(script, code, ranks)?;
            }
        }

        let mut registry = Self {
            raw,
            compiled: IndexMap::new(),
        };
        registry.build_all_models();
        Ok(registry)
    }

    /// Compile every stored rank string, replacing the current models
    ///
    /// Trigrams added through training are discarded; replay the training
    /// samples afterwards to restore them.
    pub fn build_all_models(&mut self) {
        self.compiled = self
            .raw
            .iter()
            .map(|(script, languages)| {
                let models = languages
                    .iter()
                    .map(|(code, ranks)| (code.clone(), compile_model(&split_tokens(ranks))))
                    .collect();
                (script.clone(), models)
            })
            .collect();

        log::debug!(
            "compiled {} models across {} scripts",
            self.model_count(),
            self.compiled.len()
        );
    }

    /// Compile and register a model, replacing an existing one
    pub fn add_model(&mut self, script: &str, code: &str, ranks: &str) -> Result<()> {
        script.parse::<Script>()?;
        validate_rank_string(script, code, ranks)?;

        let model = compile_model(&split_tokens(ranks));
        log::debug!("registering {script}/{code} with {} trigrams", model.len());

        self.raw
            .entry(script.to_string())
            .or_default()
            .insert(code.to_string(), ranks.to_string());
        self.compiled
            .entry(script.to_string())
            .or_default()
            .insert(code.to_string(), model);
        Ok(())
    }

    /// Models registered under a script
    pub fn models(&self, script: &str) -> Option<&LanguageModels> {
        self.compiled.get(script)
    }

    /// Model of one language
    pub fn model(&self, script: &str, code: &str) -> Option<&RankModel> {
        self.compiled.get(script)?.get(code)
    }

    /// Mutable model of a language under an existing script, created empty
    /// when missing. Returns `None` when the script has no entry.
    pub fn model_entry(&mut self, script: &str, code: &str) -> Option<&mut RankModel> {
        let models = self.compiled.get_mut(script)?;
        Some(models.entry(code.to_string()).or_default())
    }

    /// Whether any model is registered under a script
    pub fn contains_script(&self, script: &str) -> bool {
        self.compiled.contains_key(script)
    }

    /// Registered script identifiers in registry order
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.compiled.keys().map(String::as_str)
    }

    /// Language codes registered under a script
    pub fn languages(&self, script: &str) -> Vec<&str> {
        self.compiled
            .get(script)
            .map(|models| models.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Total number of language models
    pub fn model_count(&self) -> usize {
        self.compiled.values().map(IndexMap::len).sum()
    }
}
