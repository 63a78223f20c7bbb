//! Validate command implementation

use anyhow::Result;
use clap::Args;
use langsniff_core::{Config, Guesser};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        // Building the guesser also compiles the extra models
        match Config::from_file(&self.config).and_then(Guesser::with_config) {
            Ok(guesser) => {
                let config = guesser.config();
                println!("✓ Configuration is valid!");
                println!("  Extra models: {}", config.extra_models().len());
                println!("  Training sentences: {}", config.training().len());
                println!(
                    "  Registered models: {}",
                    guesser.detector().registry().model_count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        args.execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
min_length = 5
allow_list = ["en", "fr"]

[[extra_models]]
script = "ell"
code = "ell"
ranks = "καλ|αλη"

[[training]]
locale = "en"
sentence = "Hello there"
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_invalid_value() {
        assert!(validate("max_chars = 0\n").is_err());
    }

    #[test]
    fn test_validate_malformed_model() {
        let toml_content = r#"
[[extra_models]]
script = "Latin"
code = "xxx"
ranks = "abcd"
"#;
        let error = validate(toml_content).unwrap_err();
        assert!(error.to_string().contains("Malformed model Latin/xxx"));
    }

    #[test]
    fn test_validate_unknown_script() {
        let toml_content = r#"
[[extra_models]]
script = "Klingon"
code = "tlh"
ranks = "abc"
"#;
        assert!(matches!(
            validate(toml_content).unwrap_err().downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/langsniff.toml"),
        };
        assert!(args.execute().is_err());
    }
}
