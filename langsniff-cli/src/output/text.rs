//! Plain text output formatter

use super::{Matches, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one `source<TAB>code<TAB>score<TAB>name` line per result
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_matches(&mut self, source: &str, matches: &Matches) -> Result<()> {
        let rows = matches.rows();
        if rows.is_empty() {
            writeln!(self.writer, "{source}\tund")?;
        }
        for row in rows {
            writeln!(
                self.writer,
                "{source}\t{}\t{:.4}\t{}",
                row.code,
                row.score,
                row.name.unwrap_or("-")
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
