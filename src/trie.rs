//! Arena-backed prefix tree.
//!
//! Nodes live in a single `Vec` and reference each other by [`NodeId`]. Each
//! node carries a dense edge table with one slot per alphabet symbol, so child
//! lookup is a single index operation. Insertion is iterative, which keeps very
//! long strings from hitting recursion limits.
//!
//! Labels are small integers recorded on the node where an inserted string
//! ends. The automaton layer later widens these label sets along suffix links.

use crate::alphabet::Alphabet;
use crate::error::WildscanError;

/// Index of a node inside the trie arena.
pub type NodeId = u32;

/// The root node always occupies slot 0.
pub const ROOT: NodeId = 0;

/// Edge table sentinel for "no child".
const NO_EDGE: NodeId = NodeId::MAX;

/// A single trie node.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Child per alphabet index, `NO_EDGE` when absent
    edges: Box<[NodeId]>,
    /// Sorted, deduplicated labels of strings ending here
    labels: Vec<u32>,
    depth: u32,
}

impl TrieNode {
    fn new(alphabet_len: usize, depth: u32) -> Self {
        Self {
            edges: vec![NO_EDGE; alphabet_len].into_boxed_slice(),
            labels: Vec::new(),
            depth,
        }
    }

    /// Labels recorded on this node, ascending.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Distance from the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Child for a dense symbol index.
    #[inline]
    pub fn child_at(&self, index: usize) -> Option<NodeId> {
        match self.edges[index] {
            NO_EDGE => None,
            id => Some(id),
        }
    }

    /// Existing edges in ascending symbol order as `(symbol index, child)`.
    pub fn children(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|&(_, &id)| id != NO_EDGE)
            .map(|(index, &id)| (index, id))
    }

    fn add_label(&mut self, label: u32) {
        if let Err(pos) = self.labels.binary_search(&label) {
            self.labels.insert(pos, label);
        }
    }
}

/// Prefix tree over an [`Alphabet`].
#[derive(Debug, Clone)]
pub struct Trie {
    alphabet: Alphabet,
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Creates a trie holding only the root.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            nodes: vec![TrieNode::new(alphabet.len(), 0)],
        }
    }

    /// The alphabet edges are indexed by.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node. `id` must come from this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    /// Inserts `string`, creating missing edges, and records `label` on the
    /// node reached by consuming it.
    ///
    /// The string is validated up front, so a rejected string leaves the trie
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`WildscanError::InvalidPattern`] if a byte lies outside the alphabet or
    /// the arena would exceed the `NodeId` range.
    pub fn add_string(&mut self, label: u32, string: &[u8]) -> Result<NodeId, WildscanError> {
        let indices = string
            .iter()
            .enumerate()
            .map(|(pos, &byte)| {
                self.alphabet.index(byte).ok_or_else(|| {
                    WildscanError::InvalidPattern(format!(
                        "symbol {:?} at position {} is outside the alphabet {}",
                        byte as char, pos, self.alphabet
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut current = ROOT;
        for index in indices {
            current = match self.nodes[current as usize].child_at(index) {
                Some(next) => next,
                None => {
                    let new_id = NodeId::try_from(self.nodes.len())
                        .ok()
                        .filter(|&id| id != NO_EDGE)
                        .ok_or_else(|| {
                            WildscanError::InvalidPattern("too many trie nodes".to_string())
                        })?;
                    let depth = self.nodes[current as usize].depth + 1;
                    self.nodes.push(TrieNode::new(self.alphabet.len(), depth));
                    self.nodes[current as usize].edges[index] = new_id;
                    new_id
                }
            };
        }

        self.nodes[current as usize].add_label(label);
        Ok(current)
    }

    /// Child of `node` along `symbol`, or `None` when there is no such edge or
    /// the symbol is outside the alphabet. Absence is an ordinary answer here.
    #[inline]
    pub fn child(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        let index = self.alphabet.index(symbol)?;
        self.node(node).child_at(index)
    }

    /// Child of `node` along `symbol` for callers that know the edge exists.
    ///
    /// # Errors
    ///
    /// [`WildscanError::MalformedAutomaton`] when the edge is missing, which
    /// means the structure was built incorrectly.
    pub fn expect_child(&self, node: NodeId, symbol: u8) -> Result<NodeId, WildscanError> {
        self.child(node, symbol).ok_or_else(|| {
            WildscanError::MalformedAutomaton(format!(
                "node {} has no edge for {:?}",
                node, symbol as char
            ))
        })
    }

    /// Walks `string` from the root.
    pub fn find(&self, string: &[u8]) -> Option<NodeId> {
        string
            .iter()
            .try_fold(ROOT, |node, &symbol| self.child(node, symbol))
    }

    /// Adds every label of `from` to `to`.
    pub(crate) fn merge_labels(&mut self, to: NodeId, from: NodeId) {
        if to == from || self.nodes[from as usize].labels.is_empty() {
            return;
        }
        let inherited = self.nodes[from as usize].labels.clone();
        let target = &mut self.nodes[to as usize].labels;
        target.extend(inherited);
        target.sort_unstable();
        target.dedup();
    }
}
