//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use langsniff_core::{LanguageTable, ModelRegistry, Script};
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List language metadata (alpha-2, alpha-3, name)
    Languages,

    /// List known scripts and their modeled languages
    Scripts,
}

impl ListCommands {
    /// Execute the list command on stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to a writer
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for entry in LanguageTable::default().entries() {
                    writeln!(out, "{}\t{}\t{}", entry.alpha2, entry.alpha3, entry.name)?;
                }
            }
            ListCommands::Scripts => {
                let registry = ModelRegistry::embedded()?;
                for script in Script::all() {
                    let languages = registry.languages(script.id());
                    if languages.is_empty() {
                        writeln!(out, "{script}\t(script only)")?;
                    } else {
                        writeln!(out, "{script}\t{}", languages.join(", "))?;
                    }
                }
            }
        }
        Ok(())
    }
}
