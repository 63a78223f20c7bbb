//! Language metadata
//!
//! Maps between ISO 639-1 (alpha-2) and ISO 639-3 (alpha-3) codes and
//! human readable names. Both indexes are built once and never change.

mod table;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// One language of the metadata table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageEntry {
    /// ISO 639-1 code
    pub alpha2: &'static str,
    /// ISO 639-3 code
    pub alpha3: &'static str,
    /// English name
    pub name: &'static str,
}

impl fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.alpha2, self.alpha3)
    }
}

/// Language metadata indexed by alpha-2 and alpha-3 code
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
    by_alpha2: HashMap<&'static str, usize>,
    by_alpha3: HashMap<&'static str, usize>,
}

impl LanguageTable {
    /// Build a table from entries; later duplicates win in the indexes
    pub fn from_entries(entries: Vec<LanguageEntry>) -> Self {
        let mut by_alpha2 = HashMap::with_capacity(entries.len());
        let mut by_alpha3 = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            by_alpha2.insert(entry.alpha2, index);
            by_alpha3.insert(entry.alpha3, index);
        }

        Self {
            entries,
            by_alpha2,
            by_alpha3,
        }
    }

    /// Look up a language by alpha-2 code
    pub fn by_alpha2(&self, code: &str) -> Option<&LanguageEntry> {
        self.by_alpha2.get(code).map(|&index| &self.entries[index])
    }

    /// Look up a language by alpha-3 code
    pub fn by_alpha3(&self, code: &str) -> Option<&LanguageEntry> {
        self.by_alpha3.get(code).map(|&index| &self.entries[index])
    }

    /// Resolve a locale to an alpha-3 code
    ///
    /// Known alpha-2 codes are mapped; anything else is returned unchanged
    /// and treated as an alpha-3 code.
    pub fn resolve_alpha3<'a>(&self, locale: &'a str) -> &'a str {
        match self.by_alpha2(locale) {
            Some(entry) => entry.alpha3,
            None => locale,
        }
    }

    /// All entries in table order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::from_entries(
            table::LANGUAGES
                .iter()
                .map(|&(alpha2, alpha3, name)| LanguageEntry {
                    alpha2,
                    alpha3,
                    name,
                })
                .collect(),
        )
    }
}
