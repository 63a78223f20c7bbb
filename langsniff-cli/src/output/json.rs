//! JSON output formatter

use super::{Matches, OutputFormatter};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one record per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<DetectionRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DetectionRecord {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// Results, best first
    pub results: Matches,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_matches(&mut self, source: &str, matches: &Matches) -> Result<()> {
        self.records.push(DetectionRecord {
            source: source.to_string(),
            results: matches.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_json_records() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_matches("<text>", &guesses()).unwrap();
        formatter.format_matches("a.txt", &candidates()).unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["source"], "<text>");
        assert_eq!(value[0]["results"][0]["alpha3"], "eng");
        assert_eq!(value[0]["results"][0]["alpha2"], "en");
        assert_eq!(value[0]["results"][0]["language"], "English");
        assert_eq!(value[0]["results"][0]["score"], 1.0);
        assert_eq!(value[1]["results"][0]["code"], "Latin");
    }

    #[test]
    fn test_json_empty() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
