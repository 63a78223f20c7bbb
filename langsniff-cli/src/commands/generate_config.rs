//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to restrict or extend detection");
        println!("2. Validate your configuration:");
        println!("   langsniff validate -c {}", self.output.display());
        println!("3. Use it for detection:");
        println!("   langsniff detect -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        r#"# langsniff configuration

# Texts shorter than this many characters are reported as undetermined
min_length = 10

# Texts are truncated to this many characters before scoring
max_chars = 2048

# Default allow list when none is given on the command line.
# Alpha-2 ("en") and alpha-3 ("eng") codes are accepted; empty allows all.
allow_list = []

# Languages never reported (alpha-3 codes)
deny_list = []

# Maximum number of guesses per text
# limit = 3

# Worker threads for batch detection (default: all cores)
# threads = 4

# Additional trigram models. Trigrams are listed from the rarest to the
# most frequent, separated by "|" or as consecutive three-character chunks.
# The script is either a shared script name (Latin, Cyrillic, Arabic,
# Devanagari, Hebrew, ...) or the code of a single-language script (ell, tha, ...).
#
# [[extra_models]]
# script = "ell"
# code = "ell"
# ranks = "καλ|αλη|λημ|ημέ|μέρ|έρα"

# Training sentences added to a language model at startup
#
# [[training]]
# locale = "en"
# sentence = "The quick brown fox jumps over the lazy dog"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langsniff_core::Config;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("langsniff.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("langsniff.toml"));
    }

    #[test]
    fn test_template_is_valid_config() {
        let config = Config::from_toml_str(&GenerateConfigArgs::generate_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("langsniff.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("max_chars = 2048"));
    }
}
