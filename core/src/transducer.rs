// core/src/transducer.rs
//
// Narrow seam between assembly logic and the rule-matching strategy.
// Any concrete matcher (longest-match trie, regex cascade, FST) can sit
// behind this trait without touching backend or separator code.

use crate::error::TransduceError;

/// Trait that rule matchers must implement to work with the generic engine.
pub trait Transducer {
    /// Map a whitespace-free token to its ordered phone sequence.
    ///
    /// The token is segmented into graphemes according to the matcher's own
    /// tokenization contract; callers never see the intermediate morpheme
    /// boundaries, only the resulting phones in order.
    ///
    /// Fails with [`TransduceError`] when part of the token has no matching
    /// rule. The error must surface to the caller as-is; there is no
    /// best-effort output.
    fn transduce(&self, token: &str) -> Result<Vec<String>, TransduceError>;
}

impl<T: Transducer + ?Sized> Transducer for &T {
    fn transduce(&self, token: &str) -> Result<Vec<String>, TransduceError> {
        (**self).transduce(token)
    }
}
