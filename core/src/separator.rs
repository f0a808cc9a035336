//! Output delimiters between phones, syllables and words.

/// Delimiter triple inserted at phone, syllable and word boundaries of a
/// transcription.
///
/// Each field is tri-state:
/// - `None`: no marker at this boundary level,
/// - `Some("")`: an explicit zero-width marker,
/// - `Some(s)`: the marker string `s`.
///
/// The three fields are independent. They may be empty, equal to each other
/// or whitespace; no uniqueness is enforced. Reusing the same string for two
/// boundary kinds makes them indistinguishable in output, which is accepted
/// behavior.
///
/// # Example
/// ```
/// use libg2p_core::Separator;
///
/// let sep = Separator::default().with_word("_").with_phone(" ");
/// assert_eq!(sep.word(), Some("_"));
/// assert_eq!(sep.phone(), Some(" "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    phone: Option<String>,
    syllable: Option<String>,
    word: Option<String>,
}

impl Default for Separator {
    /// Word boundaries marked by a space, syllable boundaries by a pipe,
    /// phone boundaries by the zero-width marker.
    fn default() -> Self {
        Self {
            phone: Some(String::new()),
            syllable: Some("|".to_string()),
            word: Some(" ".to_string()),
        }
    }
}

impl Separator {
    /// Build a separator from explicit tri-state fields.
    pub fn new(
        word: Option<&str>,
        syllable: Option<&str>,
        phone: Option<&str>,
    ) -> Self {
        Self {
            phone: phone.map(str::to_string),
            syllable: syllable.map(str::to_string),
            word: word.map(str::to_string),
        }
    }

    /// A separator with no marker at any boundary level.
    pub fn none() -> Self {
        Self {
            phone: None,
            syllable: None,
            word: None,
        }
    }

    /// Replace the word separator.
    pub fn with_word<S: Into<String>>(mut self, word: S) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Replace the syllable separator.
    pub fn with_syllable<S: Into<String>>(mut self, syllable: S) -> Self {
        self.syllable = Some(syllable.into());
        self
    }

    /// Replace the phone separator.
    pub fn with_phone<S: Into<String>>(mut self, phone: S) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Drop the word separator (no marker at word boundaries).
    pub fn without_word(mut self) -> Self {
        self.word = None;
        self
    }

    /// Drop the syllable separator.
    pub fn without_syllable(mut self) -> Self {
        self.syllable = None;
        self
    }

    /// Drop the phone separator.
    pub fn without_phone(mut self) -> Self {
        self.phone = None;
        self
    }

    /// The word separator, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// The syllable separator, if any.
    pub fn syllable(&self) -> Option<&str> {
        self.syllable.as_deref()
    }

    /// The phone separator, if any.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// The separator used by the vast majority of callers.
pub fn default_separator() -> Separator {
    Separator::default()
}
