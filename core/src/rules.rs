//! Rule-set compilation from plain-text grapheme -> phone mappings.

use ahash::AHashMap;

use crate::error::{RuleError, TransduceError};
use crate::transducer::Transducer;
use crate::trie::GraphemeTrie;
use crate::utils;

/// A compiled grapheme -> phone mapping for one language.
///
/// Built from rule text where each non-blank line holds exactly two
/// whitespace-separated fields, `grapheme phone`:
///
/// ```text
/// a  ʌ
/// ch tʃ
/// i  ɪ
/// ```
///
/// Duplicate graphemes keep the last rule. Both fields are NFC-normalized
/// on load. Transduction segments a token by longest match against the
/// grapheme set, left to right, and maps each matched grapheme to its phone.
#[derive(Debug, Default)]
pub struct RuleSet {
    map: AHashMap<String, String>,
    trie: GraphemeTrie,
}

impl RuleSet {
    /// Compile a rule set from rule text.
    ///
    /// Fails on the first line violating the two-field grammar; a single
    /// bad line invalidates the whole text.
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let mut map = AHashMap::new();
        for (num, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(RuleError::FieldCount {
                    line: num + 1,
                    found: fields.len(),
                });
            }
            map.insert(utils::normalize(fields[0]), utils::normalize(fields[1]));
        }

        let mut trie = GraphemeTrie::new();
        for (grapheme, phone) in &map {
            trie.insert(grapheme, phone);
        }
        tracing::trace!(rules = map.len(), "compiled rule set");

        Ok(Self { map, trie })
    }

    /// Number of distinct graphemes in the rule set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the rule set holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Phone for exactly the given grapheme, if a rule exists.
    pub fn phone(&self, grapheme: &str) -> Option<&str> {
        self.map.get(grapheme).map(String::as_str)
    }

    /// Iterate over all `(grapheme, phone)` rules, unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(g, p)| (g.as_str(), p.as_str()))
    }
}

impl Transducer for RuleSet {
    fn transduce(&self, token: &str) -> Result<Vec<String>, TransduceError> {
        let token = utils::normalize(token);
        let chars: Vec<char> = token.chars().collect();

        let mut phones = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            match self.trie.longest_match(&chars, pos) {
                Some((end, phone)) => {
                    phones.push(phone.to_string());
                    pos = end;
                }
                None => {
                    return Err(TransduceError::NoMatchingRule {
                        remainder: chars[pos..].iter().collect(),
                        token,
                    });
                }
            }
        }
        Ok(phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREE_SUBSET: &str = "a ʌ\nch tʃ\ni ɪ\no ʊ\n";

    #[test]
    fn parse_counts_rules() {
        let rules = RuleSet::parse(CREE_SUBSET).unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.phone("ch"), Some("tʃ"));
        assert_eq!(rules.phone("c"), None);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let rules = RuleSet::parse("\na ʌ\n\n  \no ʊ\n\n").unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn parse_rejects_one_field() {
        let err = RuleSet::parse("a a\nc\n").unwrap_err();
        assert_eq!(err, RuleError::FieldCount { line: 2, found: 1 });
    }

    #[test]
    fn parse_rejects_three_fields() {
        let err = RuleSet::parse("a a\nb b b\nc c\n").unwrap_err();
        assert_eq!(err, RuleError::FieldCount { line: 2, found: 3 });
    }

    #[test]
    fn duplicate_grapheme_keeps_last() {
        let rules = RuleSet::parse("a ʌ\na ɑ\n").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.phone("a"), Some("ɑ"));
        assert_eq!(rules.transduce("a").unwrap(), vec!["ɑ"]);
    }

    #[test]
    fn transduce_longest_match() {
        let rules = RuleSet::parse(CREE_SUBSET).unwrap();
        assert_eq!(rules.transduce("achi").unwrap(), vec!["ʌ", "tʃ", "ɪ"]);
        assert_eq!(rules.transduce("acho").unwrap(), vec!["ʌ", "tʃ", "ʊ"]);
    }

    #[test]
    fn transduce_empty_token() {
        let rules = RuleSet::parse(CREE_SUBSET).unwrap();
        assert_eq!(rules.transduce("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn transduce_unknown_grapheme() {
        let rules = RuleSet::parse(CREE_SUBSET).unwrap();
        let err = rules.transduce("aXi").unwrap_err();
        assert_eq!(
            err,
            TransduceError::NoMatchingRule {
                token: "aXi".to_string(),
                remainder: "Xi".to_string(),
            }
        );
    }

    #[test]
    fn transduce_matches_decomposed_input() {
        // rule uses the composed form, input arrives decomposed
        let rules = RuleSet::parse("â ɑː\n").unwrap();
        assert_eq!(rules.transduce("a\u{0302}").unwrap(), vec!["ɑː"]);
    }
}
