//! Detection configuration
//!
//! A [`Config`] is built either fluently through [`ConfigBuilder`] or from a
//! TOML document:
//!
//! ```toml
//! min_length = 10
//! max_chars = 2048
//! allow_list = ["en", "fr"]
//! limit = 3
//!
//! [[extra_models]]
//! script = "ell"
//! code = "ell"
//! ranks = "καλ|αλη|λημ"
//!
//! [[training]]
//! locale = "en"
//! sentence = "Supercalifragilistic words"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LangsniffError, Result};

/// Default configuration constants
pub mod defaults {
    /// Shortest text (in chars) that is scored at all
    pub const MIN_LENGTH: usize = 10;

    /// Texts are truncated to this many chars before scoring
    pub const MAX_CHARS: usize = 2048;
}

/// A model registered on top of the embedded data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Script identifier, e.g. `Latin` or `ell`
    pub script: String,
    /// Language code the model is stored under
    pub code: String,
    /// Rank string, `|`-delimited or three-char chunked
    pub ranks: String,
}

/// A training sentence replayed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSpec {
    /// Alpha-2 or alpha-3 code of the sentence's language
    pub locale: String,
    /// Sample text
    pub sentence: String,
}

/// Detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub(crate) min_length: usize,
    pub(crate) max_chars: usize,
    pub(crate) allow_list: Vec<String>,
    pub(crate) deny_list: Vec<String>,
    pub(crate) limit: Option<usize>,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) extra_models: Vec<ModelSpec>,
    pub(crate) training: Vec<TrainingSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            max_chars: defaults::MAX_CHARS,
            allow_list: Vec::new(),
            deny_list: Vec::new(),
            limit: None,
            threads: None,
            extra_models: Vec::new(),
            training: Vec::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(source).map_err(|e| LangsniffError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LangsniffError::Configuration(e.to_string()))
    }

    /// Shortest text that is scored
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Truncation limit in chars
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Default allow list, alpha-2 or alpha-3 codes
    pub fn allow_list(&self) -> &[String] {
        &self.allow_list
    }

    /// Languages never reported
    pub fn deny_list(&self) -> &[String] {
        &self.deny_list
    }

    /// Default number of guesses
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Worker threads for batch detection
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Models registered at construction
    pub fn extra_models(&self) -> &[ModelSpec] {
        &self.extra_models
    }

    /// Sentences replayed at construction
    pub fn training(&self) -> &[TrainingSpec] {
        &self.training
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(LangsniffError::Configuration(
                "min_length must be greater than 0".into(),
            ));
        }

        if self.max_chars == 0 {
            return Err(LangsniffError::Configuration(
                "max_chars must be greater than 0".into(),
            ));
        }

        if self.limit == Some(0) {
            return Err(LangsniffError::Configuration(
                "limit must be greater than 0".into(),
            ));
        }

        if self.threads == Some(0) {
            return Err(LangsniffError::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        for spec in &self.extra_models {
            if spec.code.is_empty() {
                return Err(LangsniffError::Configuration(format!(
                    "extra model under '{}' has an empty code",
                    spec.script
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shortest text that is scored
    pub fn min_length(mut self, chars: usize) -> Self {
        self.config.min_length = chars;
        self
    }

    /// Set the truncation limit in chars
    pub fn max_chars(mut self, chars: usize) -> Self {
        self.config.max_chars = chars;
        self
    }

    /// Set the default allow list
    pub fn allow_list<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_list = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the deny list
    pub fn deny_list<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.deny_list = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the default number of guesses
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.limit = limit;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Register an additional model
    pub fn extra_model(
        mut self,
        script: impl Into<String>,
        code: impl Into<String>,
        ranks: impl Into<String>,
    ) -> Self {
        self.config.extra_models.push(ModelSpec {
            script: script.into(),
            code: code.into(),
            ranks: ranks.into(),
        });
        self
    }

    /// Add a training sentence
    pub fn training_sentence(
        mut self,
        locale: impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        self.config.training.push(TrainingSpec {
            locale: locale.into(),
            sentence: sentence.into(),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_length(), 10);
        assert_eq!(config.max_chars(), 2048);
        assert!(config.allow_list().is_empty());
        assert!(config.deny_list().is_empty());
        assert_eq!(config.limit(), None);
        assert_eq!(config.threads(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .min_length(5)
            .allow_list(["en", "fr"])
            .deny_list(vec!["spa".to_string()])
            .limit(Some(2))
            .threads(Some(4))
            .extra_model("ell", "ell", "καλ|αλη")
            .training_sentence("en", "hello there")
            .build()
            .unwrap();

        assert_eq!(config.min_length(), 5);
        assert_eq!(config.allow_list(), ["en", "fr"]);
        assert_eq!(config.deny_list(), ["spa"]);
        assert_eq!(config.limit(), Some(2));
        assert_eq!(config.threads(), Some(4));
        assert_eq!(config.extra_models()[0].code, "ell");
        assert_eq!(config.training()[0].sentence, "hello there");
    }

    #[test]
    fn test_builder_validation() {
        assert!(Config::builder().min_length(0).build().is_err());
        assert!(Config::builder().max_chars(0).build().is_err());
        assert!(Config::builder().limit(Some(0)).build().is_err());

        let err = Config::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, LangsniffError::Configuration(_)));
        assert!(err.to_string().contains("threads"));
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
min_length = 4
allow_list = ["en", "deu"]

[[extra_models]]
script = "ell"
code = "ell"
ranks = "καλ|αλη"

[[training]]
locale = "en"
sentence = "Hello World"
"#,
        )
        .unwrap();

        assert_eq!(config.min_length(), 4);
        assert_eq!(config.max_chars(), 2048);
        assert_eq!(config.allow_list(), ["en", "deu"]);
        assert_eq!(config.extra_models().len(), 1);
        assert_eq!(config.training()[0].locale, "en");
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = Config::from_toml_str("chunk_size = 10\n").unwrap_err();
        assert!(matches!(err, LangsniffError::Configuration(_)));
    }

    #[test]
    fn test_from_toml_validates() {
        assert!(Config::from_toml_str("limit = 0\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_chars = 100").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.max_chars(), 100);

        let missing = Config::from_file("/nonexistent/langsniff.toml");
        assert!(matches!(missing, Err(LangsniffError::Io(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::builder()
            .allow_list(["en"])
            .limit(Some(3))
            .extra_model("Latin", "xxx", "abc|def")
            .build()
            .unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
