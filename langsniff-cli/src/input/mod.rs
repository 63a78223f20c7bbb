//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// A named piece of text to detect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// Text content
    pub text: String,
}

impl InputText {
    /// Create a named input
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}
