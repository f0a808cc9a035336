// libortho/src/engine.rs
//
// Transcription engine over a compiled rule set.
// Generic over the rule-matching strategy so alternative matchers can be
// plugged in without touching the backend.

use libg2p_core::{RuleSet, TransduceError, Transducer};

use crate::error::ConfigError;
use crate::registry;

/// A per-language transduction engine.
///
/// Owns the compiled rules for exactly one language and exposes the
/// identifier it was constructed with. Read-only after construction: all
/// methods take `&self`, so one engine can be shared across threads for
/// concurrent transduction.
///
/// The type parameter is the rule-matching strategy; the bundled strategy
/// is [`RuleSet`] (trie longest-match).
#[derive(Debug)]
pub struct TranscriptionEngine<T = RuleSet> {
    language: String,
    transducer: T,
}

impl TranscriptionEngine<RuleSet> {
    /// Resolve and compile `language` (a bundled name or a `.g2p` path).
    ///
    /// Fails with [`ConfigError`] at construction time, never lazily:
    /// `TranscriptionEngine::new(id).is_ok()` agrees exactly with
    /// [`crate::is_supported_language`]`(id)`.
    pub fn new(language: &str) -> Result<Self, ConfigError> {
        let rules = registry::load(language)?;
        tracing::debug!(language, rules = rules.len(), "transcription engine ready");
        Ok(Self {
            language: language.to_string(),
            transducer: rules,
        })
    }

    /// The compiled rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.transducer
    }
}

impl<T: Transducer> TranscriptionEngine<T> {
    /// Wrap an already-built transducer under a language identifier.
    ///
    /// This is the seam for alternative rule-matching strategies; no
    /// resolution or validation happens here.
    pub fn with_transducer<S: Into<String>>(language: S, transducer: T) -> Self {
        Self {
            language: language.into(),
            transducer,
        }
    }

    /// The identifier this engine was constructed with, verbatim.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Transduce one whitespace-free token into its phone sequence.
    pub fn transduce(&self, token: &str) -> Result<Vec<String>, TransduceError> {
        self.transducer.transduce(token)
    }
}
