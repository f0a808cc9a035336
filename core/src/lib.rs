//! libg2p-core
//!
//! Core separator, rule-grammar, transduction and punctuation logic shared
//! by grapheme-to-phoneme engine crates (libortho).
//!
//! This crate is deliberately I/O-free: it parses rule text that a caller
//! already read, and it transduces tokens that a caller already split.
//! Loading rule files from disk or from a bundled registry belongs to the
//! engine crates built on top.
//!
//! Public API:
//! - `Separator` - Phone/syllable/word delimiter triple
//! - `RuleSet` - Compiled grapheme -> phone mapping with longest-match lookup
//! - `Transducer` - Trait for pluggable rule-matching strategies
//! - `Punctuation` - Mark removal and preservation around words
//! - `Config` - Configuration and feature flags
use serde::{Deserialize, Serialize};

// Core modules
pub mod separator;
pub use separator::{default_separator, Separator};

pub mod trie;
pub use trie::GraphemeTrie;

pub mod rules;
pub use rules::RuleSet;

pub mod transducer;
pub use transducer::Transducer;

pub mod punctuation;
pub use punctuation::{Piece, Punctuation};

pub mod error;
pub use error::{RuleError, TransduceError};

/// Generic configuration for G2P backends.
///
/// This config contains only language-agnostic fields. The language itself
/// (a bundled name or a rule-file path) is a constructor argument of the
/// engine crates, not configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Keep punctuation marks in the transcription instead of dropping them.
    ///
    /// When false (the default) mark runs are replaced by whitespace before
    /// transduction, so `"achi, acho!"` phonemizes like `"achi acho"`.
    pub preserve_punctuation: bool,

    /// The set of characters treated as punctuation marks.
    pub punctuation_marks: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_punctuation: false,
            punctuation_marks: punctuation::DEFAULT_MARKS.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    ///
    /// Rule files and input tokens both pass through here, so composed and
    /// decomposed spellings of the same grapheme always agree.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_removes_punctuation() {
        let cfg = Config::default();
        assert!(!cfg.preserve_punctuation);
        assert!(cfg.punctuation_marks.contains(','));
        assert!(cfg.punctuation_marks.contains('?'));
    }

    #[test]
    fn config_toml_round_trip() {
        let mut cfg = Config::default();
        cfg.preserve_punctuation = true;
        cfg.punctuation_marks = ",.".to_string();

        let text = cfg.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert!(back.preserve_punctuation);
        assert_eq!(back.punctuation_marks, ",.");
    }

    #[test]
    fn normalize_recomposes() {
        // 'a' + combining circumflex composes to a single scalar
        assert_eq!(utils::normalize("a\u{0302}"), "\u{e2}");
        assert_eq!(utils::normalize("  achi \n"), "achi");
    }
}
