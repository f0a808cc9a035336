/// Prefix trie for grapheme matching during transduction.
use std::collections::HashMap;

/// A prefix tree over the graphemes of one rule set.
///
/// Each inserted grapheme carries its phone payload, so longest-match
/// segmentation and phone lookup happen in a single walk.
///
/// # Example
/// ```
/// use libg2p_core::trie::GraphemeTrie;
///
/// let mut trie = GraphemeTrie::new();
/// trie.insert("a", "\u{28c}");
/// trie.insert("ch", "t\u{283}");
///
/// let input: Vec<char> = "cha".chars().collect();
/// assert_eq!(trie.longest_match(&input, 0), Some((2, "t\u{283}")));
/// assert_eq!(trie.longest_match(&input, 2), Some((3, "\u{28c}")));
/// ```
#[derive(Debug, Default)]
pub struct GraphemeTrie {
    children: HashMap<char, Box<GraphemeTrie>>,
    /// Phone payload when this node terminates a grapheme.
    phone: Option<String>,
}

impl GraphemeTrie {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            phone: None,
        }
    }

    /// Insert a grapheme with its phone payload.
    ///
    /// Inserting the same grapheme twice overwrites the payload (last rule
    /// wins). Returns `true` when the grapheme was not present before.
    pub fn insert(&mut self, grapheme: &str, phone: &str) -> bool {
        let mut node = self;
        for ch in grapheme.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(GraphemeTrie::new()));
        }
        let fresh = node.phone.is_none();
        node.phone = Some(phone.to_string());
        fresh
    }

    /// Look up the phone for exactly the given grapheme.
    ///
    /// Returns `None` if `grapheme` is only a prefix of an inserted one.
    pub fn lookup(&self, grapheme: &str) -> Option<&str> {
        let mut node = self;
        for ch in grapheme.chars() {
            node = node.children.get(&ch)?;
        }
        node.phone.as_deref()
    }

    /// Longest grapheme matching `input` at position `start`.
    ///
    /// This is the core operation of transduction: from a given position,
    /// find the longest rule source that applies there.
    ///
    /// # Returns
    /// `Some((end_index, phone))` where `end_index` is the exclusive
    /// character index after the match, or `None` when no grapheme starts
    /// at `start`.
    pub fn longest_match<'a>(
        &'a self,
        input: &[char],
        start: usize,
    ) -> Option<(usize, &'a str)> {
        let mut best: Option<(usize, &'a str)> = None;
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(phone) = &node.phone {
                        best = Some((idx, phone.as_str()));
                    }
                }
                None => break,
            }
        }
        best
    }
}
