//! Byte-keyed prefix tree holding the completion vocabulary.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// A trie node. Children are keyed by byte value and kept sorted, so
/// traversal visits them in ascending byte order.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// True if a stored token ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The child reached by `byte`, if any.
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children.get(&byte)
    }

    /// Lazily enumerate every stored token at or below this node, each
    /// reported as `seed` followed by the path taken from here.
    ///
    /// Depth-first, ascending byte order at every branch. A node's own token
    /// comes before any token that extends it.
    pub fn completions(&self, seed: &[u8]) -> Completions<'_> {
        Completions {
            path: seed.to_vec(),
            stack: Vec::new(),
            start: Some(self),
        }
    }
}

/// Prefix tree over byte tokens.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a list of tokens, inserted in order.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        for token in tokens {
            trie.insert(token);
        }
        trie
    }

    /// Insert a token. Returns `false` if it was already stored.
    pub fn insert(&mut self, token: impl AsRef<[u8]>) -> bool {
        let mut node = &mut self.root;
        for &byte in token.as_ref() {
            node = node.children.entry(byte).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Follow `prefix` from the root. `None` as soon as a byte has no child.
    ///
    /// The empty prefix yields the root.
    pub fn find_prefix(&self, prefix: &[u8]) -> Option<&TrieNode> {
        prefix
            .iter()
            .try_fold(&self.root, |node, &byte| node.child(byte))
    }

    /// True if `token` itself was inserted (not merely a prefix of one).
    pub fn contains(&self, token: &[u8]) -> bool {
        self.find_prefix(token).is_some_and(TrieNode::is_terminal)
    }

    /// Collect at most `limit` completions below `node`, in traversal order.
    /// Traversal stops as soon as the limit is reached.
    pub fn collect_completions(node: &TrieNode, seed: &[u8], limit: usize) -> Vec<Vec<u8>> {
        node.completions(seed).take(limit).collect()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct tokens stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Depth-first iterator over the tokens below a node.
/// Created by [`TrieNode::completions`].
pub struct Completions<'a> {
    path: Vec<u8>,
    /// One child iterator per node on the current path.
    stack: Vec<btree_map::Iter<'a, u8, TrieNode>>,
    /// Starting node, consumed on the first call to `next`.
    start: Option<&'a TrieNode>,
}

impl Iterator for Completions<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.terminal {
                return Some(self.path.clone());
            }
        }

        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some((&byte, child)) => {
                    self.path.push(byte);
                    self.stack.push(child.children.iter());
                    if child.terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The starting frame owns no path byte.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
        None
    }
}
