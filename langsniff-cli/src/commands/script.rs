//! Script command implementation

use anyhow::Result;
use clap::Args;
use langsniff_core::classify_script;
use std::io;

use crate::input::FileReader;

/// Arguments for the script command
#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Text to classify (default: read standard input)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

impl ScriptArgs {
    /// Execute the script command
    pub fn execute(&self) -> Result<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => FileReader::read_stream(io::stdin().lock())?,
        };
        println!("{}", Self::describe(&text));
        Ok(())
    }

    /// Script identifier and ratio of a text, tab separated
    pub fn describe(text: &str) -> String {
        let result = classify_script(text);
        format!("{}\t{:.4}", result.id(), result.ratio)
    }
}
