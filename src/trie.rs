//! Prefix tree over lowercase-ASCII pattern keys.
//!
//! Nodes live in a flat arena (`Vec<TrieNode>`) and refer to each other by
//! index: ownership flows strictly downward through the 26-slot child
//! arrays, while each node keeps a non-owning parent index used only to
//! reconstruct its full key by walking upward.

/// Number of child slots per node, one per letter `a..=z`.
pub const ALPHABET: usize = 26;

/// Root node index. The arena always holds the root at slot 0.
pub const ROOT: usize = 0;

#[derive(Debug)]
struct TrieNode {
    /// Child indices, slot `i` holding the child for letter `b'a' + i`.
    children: [Option<usize>; ALPHABET],
    /// Non-owning back-reference; `None` only for the root.
    parent: Option<usize>,
    /// The letter this node represents. Unused for the root.
    letter: u8,
    /// Letters on the path from the root. Root is 0, so a terminal node's
    /// depth equals the length of the key ending there.
    depth: usize,
    /// True if some pattern ends exactly at this node.
    terminal: bool,
    /// How many inserted keys pass through this node.
    prefix_count: usize,
}

impl TrieNode {
    fn new(parent: Option<usize>, letter: u8, depth: usize) -> Self {
        TrieNode {
            children: [None; ALPHABET],
            parent,
            letter,
            depth,
            terminal: false,
            prefix_count: 0,
        }
    }
}

/// A prefix tree built once from the full pattern set, then read-only.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new(None, 0, 0)],
        }
    }

    /// Inserts `word`, creating nodes along its path as needed and marking
    /// the final node terminal. Re-inserting the same word is idempotent.
    ///
    /// `word` must consist only of lowercase ASCII letters; the pattern
    /// table guarantees this before any insertion happens.
    pub fn insert(&mut self, word: &str) {
        let mut node_idx = ROOT;
        for &b in word.as_bytes() {
            debug_assert!(b.is_ascii_lowercase(), "non-letter byte in pattern key");
            let slot = (b - b'a') as usize;
            let next_idx = match self.nodes[node_idx].children[slot] {
                Some(existing_idx) => existing_idx,
                None => {
                    let depth = self.nodes[node_idx].depth + 1;
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::new(Some(node_idx), b, depth));
                    self.nodes[node_idx].children[slot] = Some(new_idx);
                    new_idx
                }
            };
            node_idx = next_idx;
            self.nodes[node_idx].prefix_count += 1;
        }
        self.nodes[node_idx].terminal = true;
    }

    /// Index of the root node.
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Children of `node` in ascending letter order.
    pub fn children(&self, node: usize) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.nodes[node]
            .children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|idx| (b'a' + slot as u8, idx)))
    }

    pub fn is_terminal(&self, node: usize) -> bool {
        self.nodes[node].terminal
    }

    /// Letters on the path from the root to `node`. For a terminal node
    /// this is the length of the key ending there.
    pub fn depth(&self, node: usize) -> usize {
        self.nodes[node].depth
    }

    /// How many inserted keys share the prefix ending at `node`.
    pub fn prefix_count(&self, node: usize) -> usize {
        self.nodes[node].prefix_count
    }

    /// Reconstructs the full key ending at `node` by walking parent
    /// references up to the root.
    pub fn key_of(&self, node: usize) -> String {
        let mut letters = Vec::with_capacity(self.nodes[node].depth);
        let mut cur = node;
        while let Some(parent) = self.nodes[cur].parent {
            letters.push(self.nodes[cur].letter);
            cur = parent;
        }
        letters.reverse();
        // Letters are validated lowercase ASCII at insertion.
        String::from_utf8(letters).unwrap_or_default()
    }

    /// True if `word` was inserted as a complete key.
    pub fn contains(&self, word: &str) -> bool {
        let mut node_idx = ROOT;
        for &b in word.as_bytes() {
            if !b.is_ascii_lowercase() {
                return false;
            }
            match self.nodes[node_idx].children[(b - b'a') as usize] {
                Some(child_idx) => node_idx = child_idx,
                None => return false,
            }
        }
        self.nodes[node_idx].terminal
    }

    /// Enumerates every complete key in the tree, in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_keys(ROOT, &mut prefix, &mut out);
        out
    }

    fn collect_keys(&self, node: usize, prefix: &mut Vec<u8>, out: &mut Vec<String>) {
        if self.nodes[node].terminal {
            out.push(String::from_utf8(prefix.clone()).unwrap_or_default());
        }
        for (letter, child) in self.children(node) {
            prefix.push(letter);
            self.collect_keys(child, prefix, out);
            prefix.pop();
        }
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
