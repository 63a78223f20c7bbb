//! Markdown output formatter

use super::{Matches, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs one table per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    input_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            input_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_matches(&mut self, source: &str, matches: &Matches) -> Result<()> {
        self.input_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        let rows = matches.rows();
        if rows.is_empty() {
            writeln!(self.writer, "*Undetermined*")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Code | Language | Score |")?;
        writeln!(self.writer, "|------|----------|-------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {:.4} |",
                row.code,
                row.name.unwrap_or("-"),
                row.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total inputs: {}*", self.input_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
