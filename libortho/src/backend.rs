// libortho/src/backend.rs
//
// Line-oriented phonemization: word splitting, per-word transduction and
// separator injection around the phone stream.

use libg2p_core::{Config, Piece, Punctuation, RuleSet, Separator, TransduceError, Transducer};

use crate::engine::TranscriptionEngine;
use crate::error::ConfigError;

/// Line-oriented G2P backend over a [`TranscriptionEngine`].
///
/// Stateless across calls beyond the held engine: every
/// [`phonemize`](Backend::phonemize) invocation is independent and
/// reentrant.
#[derive(Debug)]
pub struct Backend<T = RuleSet> {
    engine: TranscriptionEngine<T>,
    punctuation: Punctuation,
    preserve_punctuation: bool,
}

impl Backend<RuleSet> {
    /// Build a backend for `language` with the default configuration.
    pub fn new(language: &str) -> Result<Self, ConfigError> {
        Self::with_config(language, Config::default())
    }

    /// Build a backend for `language` with an explicit configuration.
    pub fn with_config(language: &str, config: Config) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(TranscriptionEngine::new(language)?, config))
    }
}

impl<T: Transducer> Backend<T> {
    /// Assemble a backend around an already-built engine.
    pub fn from_engine(engine: TranscriptionEngine<T>, config: Config) -> Self {
        Self {
            engine,
            punctuation: Punctuation::new(&config.punctuation_marks),
            preserve_punctuation: config.preserve_punctuation,
        }
    }

    /// The language identifier of the held engine, verbatim.
    pub fn language(&self) -> &str {
        self.engine.language()
    }

    /// The held engine.
    pub fn engine(&self) -> &TranscriptionEngine<T> {
        &self.engine
    }

    /// Transcribe `lines`, one output string per input line, in order.
    ///
    /// Each line is treated as whitespace-separated words; embedded newline
    /// characters flatten into the word sequence of that same line and never
    /// produce extra output entries. Whitespace between words is not
    /// preserved: only the configured word separator marks the boundary.
    ///
    /// Without `strip`, every phone is followed by the phone separator and
    /// every word (the last one included) by the word separator. With
    /// `strip`, trailing phone separators are omitted and exactly one
    /// trailing word separator (or phone separator, when the word separator
    /// is empty or absent) is removed from the end of each line.
    ///
    /// The call is atomic: the first token the engine cannot transduce
    /// aborts the whole call with [`TransduceError`], yielding no output
    /// for any line.
    pub fn phonemize<S: AsRef<str>>(
        &self,
        lines: &[S],
        separator: &Separator,
        strip: bool,
    ) -> Result<Vec<String>, TransduceError> {
        lines
            .iter()
            .map(|line| self.phonemize_line(line.as_ref(), separator, strip))
            .collect()
    }

    fn phonemize_line(
        &self,
        line: &str,
        separator: &Separator,
        strip: bool,
    ) -> Result<String, TransduceError> {
        if self.preserve_punctuation {
            return self.phonemize_marked_line(line, separator, strip);
        }

        let cleaned = self.punctuation.remove(line);
        let mut out = String::new();
        for word in cleaned.split_whitespace() {
            let phones = self.engine.transduce(word)?;
            push_word(&mut out, &phones, separator, strip);
        }
        if strip {
            strip_trailing(&mut out, separator);
        }
        Ok(out)
    }

    /// Preserving variant: text chunks are transcribed strip-style, marks
    /// are re-inserted verbatim, and the word separator stands in for the
    /// whitespace that flanked a mark in the input.
    fn phonemize_marked_line(
        &self,
        line: &str,
        separator: &Separator,
        strip: bool,
    ) -> Result<String, TransduceError> {
        let phone_sep = separator.phone().unwrap_or("");
        let word_sep = separator.word().unwrap_or("");

        let mut out = String::new();
        for piece in self.punctuation.split(line) {
            match piece {
                Piece::Text(text) => {
                    for (i, word) in text.split_whitespace().enumerate() {
                        if i > 0 {
                            out.push_str(word_sep);
                        }
                        let phones = self.engine.transduce(word)?;
                        out.push_str(&phones.join(phone_sep));
                    }
                }
                Piece::Mark {
                    mark,
                    space_before,
                    space_after,
                } => {
                    if space_before {
                        out.push_str(word_sep);
                    }
                    out.push_str(&mark);
                    if space_after {
                        out.push_str(word_sep);
                    }
                }
            }
        }
        if !strip {
            out.push_str(word_sep);
        }
        Ok(out)
    }
}

/// Append one word's phone stream plus its boundary markers.
///
/// Joins inside a word all use the phone boundary today; a transducer that
/// signaled syllable boundaries would select `separator.syllable()` for
/// those joins instead. None of the bundled rule sets signal them.
fn push_word(out: &mut String, phones: &[String], separator: &Separator, strip: bool) {
    let phone_sep = separator.phone().unwrap_or("");
    out.push_str(&phones.join(phone_sep));
    if !strip {
        out.push_str(phone_sep);
    }
    out.push_str(separator.word().unwrap_or(""));
}

/// Remove exactly one trailing word separator, falling back to the phone
/// separator when the word separator is empty or absent. No other trimming.
fn strip_trailing(out: &mut String, separator: &Separator) {
    let target = match separator.word() {
        Some(word) if !word.is_empty() => word,
        _ => separator.phone().unwrap_or(""),
    };
    if !target.is_empty() && out.ends_with(target) {
        out.truncate(out.len() - target.len());
    }
}
