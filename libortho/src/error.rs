//! Engine-level error types.

use std::path::PathBuf;

use libg2p_core::RuleError;
use thiserror::Error;

/// Failure to resolve or compile a language at construction time.
///
/// Fatal to the engine instance being built; never raised after
/// construction and never recovered internally. Contrast with
/// [`libg2p_core::TransduceError`], which is a per-call input-data error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Not a bundled language name, and not a readable `.g2p` file path.
    #[error("language '{0}' is not supported")]
    UnsupportedLanguage(String),

    /// The rule file exists but violates the rule grammar.
    #[error("rule file '{}' is malformed: {}", .path.display(), .source)]
    MalformedRuleFile {
        /// Rule file (or bundled language) the error came from
        path: PathBuf,
        source: RuleError,
    },

    /// The rule file exists but could not be read.
    #[error("cannot read rule file '{}': {}", .path.display(), .source)]
    Io {
        /// Rule file the read failed on
        path: PathBuf,
        source: std::io::Error,
    },
}
