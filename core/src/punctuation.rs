//! Punctuation handling around transcribed words.
//!
//! Rule sets are defined over orthographic graphemes only, so punctuation
//! marks reaching the transducer fail as unknown input. Backends therefore
//! either drop marks before transduction (the default) or carve the line
//! into text chunks and mark runs, transcribe the chunks and re-insert the
//! marks afterwards.

use regex::Regex;

/// Marks treated as punctuation when no explicit set is configured.
pub const DEFAULT_MARKS: &str = ";:,.!?¡¿—…\"«»“”";

/// One segment of a line carved around punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// A run of transcribable text (may contain several words).
    Text(String),
    /// A run of punctuation marks, kept verbatim.
    Mark {
        /// The mark run itself
        mark: String,
        /// Whitespace separated the mark from the preceding text
        space_before: bool,
        /// Whitespace separated the mark from the following text
        space_after: bool,
    },
}

/// Mark removal and line carving for a configurable mark set.
#[derive(Debug, Clone)]
pub struct Punctuation {
    marks: String,
    runs: Option<Regex>,
}

impl Default for Punctuation {
    fn default() -> Self {
        Self::new(DEFAULT_MARKS)
    }
}

impl Punctuation {
    /// Build a processor for the given mark set.
    ///
    /// An empty mark set yields a no-op processor.
    pub fn new(marks: &str) -> Self {
        let runs = if marks.is_empty() {
            None
        } else {
            let pattern = format!("[{}]+", regex::escape(marks));
            // every class member is escaped, the pattern is always valid
            Some(Regex::new(&pattern).expect("punctuation character class"))
        };
        Self {
            marks: marks.to_string(),
            runs,
        }
    }

    /// The configured mark set.
    pub fn marks(&self) -> &str {
        &self.marks
    }

    /// Replace every mark run with a single space.
    ///
    /// Word splitting downstream collapses the extra whitespace, so
    /// `"achi, acho!"` transcribes exactly like `"achi acho"`.
    pub fn remove(&self, line: &str) -> String {
        match &self.runs {
            Some(re) => re.replace_all(line, " ").into_owned(),
            None => line.to_string(),
        }
    }

    /// Carve a line into text chunks and mark runs, in order.
    ///
    /// Each mark records whether whitespace separated it from its neighbors,
    /// which is what a backend needs to stand the word separator in for the
    /// original spacing when it re-inserts the marks.
    pub fn split(&self, line: &str) -> Vec<Piece> {
        let Some(re) = &self.runs else {
            return vec![Piece::Text(line.to_string())];
        };

        let mut pieces = Vec::new();
        let mut last = 0;
        for m in re.find_iter(line) {
            let gap = &line[last..m.start()];
            if !gap.trim().is_empty() {
                pieces.push(Piece::Text(gap.trim().to_string()));
            }
            let space_before = !pieces.is_empty()
                && line[..m.start()].ends_with(|c: char| c.is_whitespace());
            let rest = &line[m.end()..];
            let space_after = rest.starts_with(|c: char| c.is_whitespace())
                && !rest.trim().is_empty();
            pieces.push(Piece::Mark {
                mark: m.as_str().to_string(),
                space_before,
                space_after,
            });
            last = m.end();
        }
        let tail = &line[last..];
        if !tail.trim().is_empty() {
            pieces.push(Piece::Text(tail.trim().to_string()));
        }
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_replaces_runs_with_space() {
        let punct = Punctuation::default();
        assert_eq!(punct.remove("achi, acho!"), "achi  acho ");
        assert_eq!(punct.remove("achi acho"), "achi acho");
        assert_eq!(punct.remove("..."), " ");
    }

    #[test]
    fn empty_mark_set_is_noop() {
        let punct = Punctuation::new("");
        assert_eq!(punct.remove("a, b"), "a, b");
        assert_eq!(punct.split("a, b"), vec![Piece::Text("a, b".to_string())]);
    }

    #[test]
    fn split_attaches_marks() {
        let punct = Punctuation::default();
        let pieces = punct.split("achi, acho!");
        assert_eq!(
            pieces,
            vec![
                Piece::Text("achi".to_string()),
                Piece::Mark {
                    mark: ",".to_string(),
                    space_before: false,
                    space_after: true,
                },
                Piece::Text("acho".to_string()),
                Piece::Mark {
                    mark: "!".to_string(),
                    space_before: false,
                    space_after: false,
                },
            ]
        );
    }

    #[test]
    fn split_leading_mark_has_no_space_before() {
        let punct = Punctuation::default();
        let pieces = punct.split("¿achi?");
        assert_eq!(
            pieces,
            vec![
                Piece::Mark {
                    mark: "¿".to_string(),
                    space_before: false,
                    space_after: false,
                },
                Piece::Text("achi".to_string()),
                Piece::Mark {
                    mark: "?".to_string(),
                    space_before: false,
                    space_after: false,
                },
            ]
        );
    }

    #[test]
    fn split_groups_mark_runs() {
        let punct = Punctuation::default();
        let pieces = punct.split("achi...");
        assert_eq!(
            pieces,
            vec![
                Piece::Text("achi".to_string()),
                Piece::Mark {
                    mark: "...".to_string(),
                    space_before: false,
                    space_after: false,
                },
            ]
        );
    }

    #[test]
    fn split_without_marks_is_one_chunk() {
        let punct = Punctuation::default();
        assert_eq!(
            punct.split("achi acho"),
            vec![Piece::Text("achi acho".to_string())]
        );
    }

    #[test]
    fn split_detached_mark_has_space_on_both_sides() {
        let punct = Punctuation::default();
        let pieces = punct.split("achi — acho");
        assert_eq!(
            pieces,
            vec![
                Piece::Text("achi".to_string()),
                Piece::Mark {
                    mark: "—".to_string(),
                    space_before: true,
                    space_after: true,
                },
                Piece::Text("acho".to_string()),
            ]
        );
    }
}
