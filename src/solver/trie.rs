//! Prefix-tree dictionary index
//!
//! Each node is exclusively owned by its parent, so the tree needs no shared
//! or weak references. The trie is built once before a search and read-only
//! afterwards.

use rustc_hash::FxHashMap;

/// One trie node: children keyed by letter byte, plus a word-end flag
///
/// `is_word` is true exactly for nodes corresponding to a complete dictionary
/// entry. A node can be a word end and still have children ("cat" / "cats").
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Descend one letter, or `None` if no dictionary word continues this way
    ///
    /// This is the single primitive the search engine uses for prefix
    /// pruning: a `None` here kills the whole branch.
    #[inline]
    #[must_use]
    pub fn step(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Does this node complete a dictionary word?
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// Can any dictionary word be extended from this node?
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Prefix tree over a dictionary of lowercase ASCII words
///
/// Validity of inserted words (non-empty, alphabetic, at or above the
/// configured minimum length) is the caller's responsibility; the loader in
/// [`crate::wordlists`] filters before insertion.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::solver::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "cats"]);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert one word, creating nodes along the way
    ///
    /// Re-inserting an existing word is a no-op for [`len`](Self::len).
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for &letter in word.as_bytes() {
            node = node.children.entry(letter).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Root node, the starting cursor for every search branch
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Full-word membership query
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for &letter in word.as_bytes() {
            match node.step(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(!trie.root().has_children());
        assert!(!trie.contains("cat"));
    }

    #[test]
    fn insert_and_contains() {
        let trie = Trie::from_words(["cat", "cats", "dog"]);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("catsup"));
    }

    #[test]
    fn prefix_is_not_a_word() {
        let trie = Trie::from_words(["cats"]);
        assert!(!trie.contains("cat"));

        let node = trie
            .root()
            .step(b'c')
            .and_then(|n| n.step(b'a'))
            .and_then(|n| n.step(b't'))
            .unwrap();
        assert!(!node.is_word());
        assert!(node.has_children());
    }

    #[test]
    fn word_end_can_have_children() {
        let trie = Trie::from_words(["cat", "cats"]);
        let node = trie
            .root()
            .step(b'c')
            .and_then(|n| n.step(b'a'))
            .and_then(|n| n.step(b't'))
            .unwrap();
        assert!(node.is_word());
        assert!(node.has_children());
    }

    #[test]
    fn step_dead_prefix_is_none() {
        let trie = Trie::from_words(["cat"]);
        assert!(trie.root().step(b'x').is_none());
        let c = trie.root().step(b'c').unwrap();
        assert!(c.step(b'z').is_none());
    }

    #[test]
    fn duplicate_insert_counted_once() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("cat");
        assert_eq!(trie.len(), 1);
    }
}
