//! Writing script classification
//!
//! Determines the dominant Unicode writing system of a text. Latin is
//! handled by a fast path (more than half of the characters printable
//! ASCII) and is not part of the generic table; every other script is
//! scored by the share of characters falling into its code point ranges.
//!
//! The order of [`Script::CLASSIFIED`] is significant: on equal ratios the
//! earlier script wins.

mod tables;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LangsniffError;

/// Identifier returned when no script could be determined
pub const UNDETERMINED: &str = "und";

/// Writing scripts known to the classifier
///
/// Scripts shared by several modeled languages use a descriptive
/// identifier (`Cyrillic`, `Arabic`, ...); scripts that map to a single
/// language use that language's ISO 639-3 code (`cmn`, `jpn`, `tha`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Latin alphabet, detected by the printable-ASCII fast path
    Latin,
    /// Han ideographs
    Han,
    /// Cyrillic
    Cyrillic,
    /// Arabic
    Arabic,
    /// Bengali
    Bengali,
    /// Devanagari
    Devanagari,
    /// Hiragana and Katakana
    Kana,
    /// Hangul
    Hangul,
    /// Telugu
    Telugu,
    /// Tamil
    Tamil,
    /// Gujarati
    Gujarati,
    /// Kannada
    Kannada,
    /// Malayalam
    Malayalam,
    /// Myanmar
    Myanmar,
    /// Oriya
    Oriya,
    /// Gurmukhi
    Gurmukhi,
    /// Ethiopic
    Ethiopic,
    /// Thai
    Thai,
    /// Sinhala
    Sinhala,
    /// Greek
    Greek,
    /// Khmer
    Khmer,
    /// Armenian
    Armenian,
    /// Ol Chiki
    OlChiki,
    /// Tibetan
    Tibetan,
    /// Hebrew
    Hebrew,
    /// Georgian
    Georgian,
    /// Lao
    Lao,
    /// Tifinagh
    Tifinagh,
    /// Yi
    Yi,
    /// Syriac
    Syriac,
}

impl Script {
    /// Scripts scored by [`classify_script`], in tie-breaking order
    pub const CLASSIFIED: [Script; 29] = [
        Script::Han,
        Script::Cyrillic,
        Script::Arabic,
        Script::Bengali,
        Script::Devanagari,
        Script::Kana,
        Script::Hangul,
        Script::Telugu,
        Script::Tamil,
        Script::Gujarati,
        Script::Kannada,
        Script::Malayalam,
        Script::Myanmar,
        Script::Oriya,
        Script::Gurmukhi,
        Script::Ethiopic,
        Script::Thai,
        Script::Sinhala,
        Script::Greek,
        Script::Khmer,
        Script::Armenian,
        Script::OlChiki,
        Script::Tibetan,
        Script::Hebrew,
        Script::Georgian,
        Script::Lao,
        Script::Tifinagh,
        Script::Yi,
        Script::Syriac,
    ];

    /// Identifier used as registry key and as detection result code
    pub fn id(&self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Han => "cmn",
            Script::Cyrillic => "Cyrillic",
            Script::Arabic => "Arabic",
            Script::Bengali => "ben",
            Script::Devanagari => "Devanagari",
            Script::Kana => "jpn",
            Script::Hangul => "kor",
            Script::Telugu => "tel",
            Script::Tamil => "tam",
            Script::Gujarati => "guj",
            Script::Kannada => "kan",
            Script::Malayalam => "mal",
            Script::Myanmar => "Myanmar",
            Script::Oriya => "ori",
            Script::Gurmukhi => "pan",
            Script::Ethiopic => "Ethiopic",
            Script::Thai => "tha",
            Script::Sinhala => "sin",
            Script::Greek => "ell",
            Script::Khmer => "khm",
            Script::Armenian => "hye",
            Script::OlChiki => "sat",
            Script::Tibetan => "bod",
            Script::Hebrew => "Hebrew",
            Script::Georgian => "kat",
            Script::Lao => "lao",
            Script::Tifinagh => "zgh",
            Script::Yi => "iii",
            Script::Syriac => "aii",
        }
    }

    /// Code point ranges of the script; empty for Latin
    fn ranges(&self) -> &'static [(u32, u32)] {
        match self {
            Script::Latin => &[],
            Script::Han => tables::HAN,
            Script::Cyrillic => tables::CYRILLIC,
            Script::Arabic => tables::ARABIC,
            Script::Bengali => tables::BENGALI,
            Script::Devanagari => tables::DEVANAGARI,
            Script::Kana => tables::KANA,
            Script::Hangul => tables::HANGUL,
            Script::Telugu => tables::TELUGU,
            Script::Tamil => tables::TAMIL,
            Script::Gujarati => tables::GUJARATI,
            Script::Kannada => tables::KANNADA,
            Script::Malayalam => tables::MALAYALAM,
            Script::Myanmar => tables::MYANMAR,
            Script::Oriya => tables::ORIYA,
            Script::Gurmukhi => tables::GURMUKHI,
            Script::Ethiopic => tables::ETHIOPIC,
            Script::Thai => tables::THAI,
            Script::Sinhala => tables::SINHALA,
            Script::Greek => tables::GREEK,
            Script::Khmer => tables::KHMER,
            Script::Armenian => tables::ARMENIAN,
            Script::OlChiki => tables::OL_CHIKI,
            Script::Tibetan => tables::TIBETAN,
            Script::Hebrew => tables::HEBREW,
            Script::Georgian => tables::GEORGIAN,
            Script::Lao => tables::LAO,
            Script::Tifinagh => tables::TIFINAGH,
            Script::Yi => tables::YI,
            Script::Syriac => tables::SYRIAC,
        }
    }

    /// Check whether a character belongs to the script's ranges - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.ranges()
            .binary_search_by(|&(start, end)| {
                if end < cp {
                    std::cmp::Ordering::Less
                } else if start > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// All scripts, Latin first
    pub fn all() -> impl Iterator<Item = Script> {
        std::iter::once(Script::Latin).chain(Self::CLASSIFIED)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Script {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl FromStr for Script {
    type Err = LangsniffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::all()
            .find(|script| script.id() == s)
            .ok_or_else(|| LangsniffError::UnknownScript(s.to_string()))
    }
}

/// Result of script classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScriptMatch {
    /// Winning script, `None` when nothing matched
    pub script: Option<Script>,
    /// Share of characters belonging to the script (1.0 for the sentinels)
    pub ratio: f64,
}

impl ScriptMatch {
    /// Identifier of the match, `und` when no script was found
    pub fn id(&self) -> &'static str {
        self.script.map_or(UNDETERMINED, |script| script.id())
    }

    fn undetermined() -> Self {
        Self {
            script: None,
            ratio: 1.0,
        }
    }
}

/// Check whether more than half of the characters are printable ASCII
///
/// Returns as soon as the running count passes the threshold.
pub fn is_latin_dominant(text: &str) -> bool {
    let half = text.chars().count() as f64 / 2.0;
    let mut total = 0usize;

    for ch in text.chars() {
        if ('\u{20}'..='\u{7E}').contains(&ch) {
            total += 1;
            if total as f64 > half {
                return true;
            }
        }
    }

    total as f64 > half
}

/// Share of characters of `text` belonging to `script`
///
/// Empty text yields 0.
pub fn occurrence_ratio(text: &str, script: Script) -> f64 {
    let mut total = 0usize;
    let mut matched = 0usize;

    for ch in text.chars() {
        total += 1;
        if script.contains(ch) {
            matched += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Determine the dominant script of a text
///
/// Latin-dominant text short-circuits to `(Latin, 1.0)`. Otherwise the
/// script with the strictly greatest ratio wins, a ratio of exactly 1 ends
/// the scan early, and text where no script matches at all (including the
/// empty string) yields `(und, 1.0)`.
pub fn classify_script(text: &str) -> ScriptMatch {
    if is_latin_dominant(text) {
        return ScriptMatch {
            script: Some(Script::Latin),
            ratio: 1.0,
        };
    }

    let mut best: Option<(Script, f64)> = None;
    for script in Script::CLASSIFIED {
        let ratio = occurrence_ratio(text, script);
        if ratio > best.map_or(0.0, |(_, top)| top) {
            best = Some((script, ratio));
            if ratio == 1.0 {
                break;
            }
        }
    }

    match best {
        Some((script, ratio)) => {
            log::trace!("classified text as {} ({:.3})", script, ratio);
            ScriptMatch {
                script: Some(script),
                ratio,
            }
        }
        None => ScriptMatch::undetermined(),
    }
}
