//! Core error types (no I/O, no engine state).

use thiserror::Error;

/// A rule file line violating the grammar.
///
/// The grammar is one rule per line, two whitespace-separated fields:
/// `grapheme phone`. Blank lines are skipped. Any other field count on a
/// non-blank line invalidates the whole file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Wrong number of fields on a rule line.
    #[error("line {line}: expected 'grapheme phone' (2 fields), found {found}")]
    FieldCount {
        /// 1-based line number in the rule text
        line: usize,
        /// Number of whitespace-separated fields found
        found: usize,
    },
}

/// A token that the compiled rule set cannot transduce.
///
/// This is a data-validation error, not a configuration error: the engine
/// is healthy, the input is not. Callers may retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransduceError {
    /// No rule source matches at some position of the token.
    #[error("no grapheme rule matches '{remainder}' in token '{token}'")]
    NoMatchingRule {
        /// The full token being transduced
        token: String,
        /// The unmatched tail, starting at the failing position
        remainder: String,
    },
}
