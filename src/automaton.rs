//! Aho-Corasick automaton over an arena trie.
//!
//! The automaton augments every trie node with a suffix link and turns the
//! trie's partial edge function into a total transition function.
//!
//! # Design
//!
//! - Suffix links are plain [`NodeId`]s stored beside the trie, so they never
//!   own anything. The root links to itself as the base case.
//! - Links are computed breadth-first. When a node is processed, every node of
//!   smaller depth already has its link and its final label set.
//! - Each node's label set is widened with the labels of its suffix link, so a
//!   state reports every string that ends at the current text position.
//! - Scanning goes through a [`Scanner`] that borrows the automaton. The live
//!   state therefore cannot outlive the trie it points into.
//!
//! With [`ScanStrategy::Dense`] the build also fills a `states x alphabet`
//! table so scanning never follows suffix links at all.

use crate::config::ScanStrategy;
use crate::error::WildscanError;
use crate::trie::{NodeId, Trie, ROOT};
use std::collections::VecDeque;

/// Aho-Corasick automaton. Node structure is frozen once built.
#[derive(Debug, Clone)]
pub struct Automaton {
    trie: Trie,
    /// Suffix link per node, indexed by `NodeId`
    suffix_links: Vec<NodeId>,
    /// Precomputed transitions, row-major by node, when built dense
    dense: Option<Box<[NodeId]>>,
}

impl Automaton {
    /// Builds an automaton over `strings`; string `i` gets label `i`.
    ///
    /// # Errors
    ///
    /// - [`WildscanError::InvalidPattern`] if a string has a symbol outside the
    ///   trie's alphabet
    /// - [`WildscanError::MalformedAutomaton`] if construction breaks an
    ///   internal invariant
    pub fn build<S: AsRef<[u8]>>(
        mut trie: Trie,
        strings: &[S],
        strategy: ScanStrategy,
    ) -> Result<Self, WildscanError> {
        for (label, string) in strings.iter().enumerate() {
            let label = u32::try_from(label)
                .map_err(|_| WildscanError::InvalidPattern("too many strings".to_string()))?;
            trie.add_string(label, string.as_ref())?;
        }

        let mut automaton = Self::from_trie(trie, strategy)?;
        automaton.check_terminal_labels(strings)?;

        log::debug!(
            "built automaton: {} strings, {} nodes, strategy {}",
            strings.len(),
            automaton.node_count(),
            strategy
        );
        Ok(automaton)
    }

    /// Turns an already populated trie into an automaton.
    pub fn from_trie(trie: Trie, strategy: ScanStrategy) -> Result<Self, WildscanError> {
        let node_count = trie.node_count();
        let mut automaton = Self {
            trie,
            suffix_links: vec![ROOT; node_count],
            dense: None,
        };

        let order = automaton.build_suffix_links()?;
        if strategy == ScanStrategy::Dense {
            automaton.dense = Some(automaton.build_dense_table(&order));
        }
        Ok(automaton)
    }

    /// Computes suffix links and propagates labels. Returns the BFS order,
    /// root first.
    fn build_suffix_links(&mut self) -> Result<Vec<NodeId>, WildscanError> {
        let mut order = Vec::with_capacity(self.trie.node_count());
        let mut queue = VecDeque::new();

        self.suffix_links[ROOT as usize] = ROOT;
        order.push(ROOT);

        // Depth-1 nodes fail to root
        let root_children: Vec<NodeId> =
            self.trie.node(ROOT).children().map(|(_, id)| id).collect();
        for child in root_children {
            self.suffix_links[child as usize] = ROOT;
            queue.push_back(child);
        }

        while let Some(node) = queue.pop_front() {
            order.push(node);

            let children: Vec<(usize, NodeId)> = self.trie.node(node).children().collect();
            for (index, child) in children {
                queue.push_back(child);

                let link = self.resolve_suffix_link(node, child, index)?;
                self.suffix_links[child as usize] = link;
                self.trie.merge_labels(child, link);
            }
        }

        if order.len() != self.trie.node_count() {
            return Err(WildscanError::MalformedAutomaton(format!(
                "breadth-first walk reached {} of {} nodes",
                order.len(),
                self.trie.node_count()
            )));
        }
        Ok(order)
    }

    /// Finds the suffix link of `child`, reached from `parent` by `index`.
    ///
    /// Starts at the parent's link and keeps falling back until some state has
    /// a transition on `index`. The root always has one, so a well-formed trie
    /// needs at most `depth(parent)` hops.
    fn resolve_suffix_link(
        &self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> Result<NodeId, WildscanError> {
        let parent_depth = self.trie.node(parent).depth();
        let mut state = self.suffix_links[parent as usize];

        for _ in 0..=parent_depth {
            if let Some(target) = self.next_index(state, index) {
                if self.trie.node(target).depth() >= self.trie.node(child).depth() {
                    return Err(WildscanError::MalformedAutomaton(format!(
                        "suffix link of node {} does not decrease depth",
                        child
                    )));
                }
                return Ok(target);
            }
            state = self.suffix_links[state as usize];
        }

        Err(WildscanError::MalformedAutomaton(format!(
            "suffix link chain for node {} never reached the root",
            child
        )))
    }

    /// Fills the full transition table in BFS order, so the row of a node's
    /// suffix link is always complete before the node itself.
    fn build_dense_table(&self, order: &[NodeId]) -> Box<[NodeId]> {
        let width = self.trie.alphabet().len();
        let mut table = vec![ROOT; self.trie.node_count() * width];

        for &node in order {
            let row = node as usize * width;
            let fallback_row = self.suffix_links[node as usize] as usize * width;
            for index in 0..width {
                table[row + index] = match self.trie.node(node).child_at(index) {
                    Some(child) => child,
                    None if node == ROOT => ROOT,
                    None => table[fallback_row + index],
                };
            }
        }

        table.into_boxed_slice()
    }

    /// Walks each inserted string with edges that must exist and checks that
    /// its terminal node carries its label.
    fn check_terminal_labels<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<(), WildscanError> {
        for (label, string) in strings.iter().enumerate() {
            let mut node = ROOT;
            for &symbol in string.as_ref() {
                node = self.trie.expect_child(node, symbol)?;
            }
            if self.labels(node).binary_search(&(label as u32)).is_err() {
                return Err(WildscanError::MalformedAutomaton(format!(
                    "label {} missing from its terminal node {}",
                    label, node
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn next_index(&self, node: NodeId, index: usize) -> Option<NodeId> {
        match self.trie.node(node).child_at(index) {
            Some(child) => Some(child),
            None if node == ROOT => Some(ROOT),
            None => None,
        }
    }

    /// Transition on `symbol` without fallback.
    ///
    /// Returns the direct edge if there is one, the root if `node` is the root,
    /// and `None` otherwise; the caller then retries from the suffix link.
    /// Symbols outside the alphabet lead back to the root.
    pub fn next_node(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        match self.trie.alphabet().index(symbol) {
            Some(index) => self.next_index(node, index),
            None => Some(ROOT),
        }
    }

    /// Total transition function: direct edge or suffix-link fallback.
    pub fn goto(&self, node: NodeId, symbol: u8) -> NodeId {
        let mut scanner = Scanner {
            automaton: self,
            state: node,
        };
        scanner.make_transition(symbol);
        scanner.state
    }

    /// Suffix link of `node`.
    pub fn suffix_link(&self, node: NodeId) -> NodeId {
        self.suffix_links[node as usize]
    }

    /// Labels reported when the automaton is in `node`.
    pub fn labels(&self, node: NodeId) -> &[u32] {
        self.trie.node(node).labels()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of states.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Whether transitions come from the precomputed table.
    pub fn strategy(&self) -> ScanStrategy {
        if self.dense.is_some() {
            ScanStrategy::Dense
        } else {
            ScanStrategy::Links
        }
    }

    /// Starts a scan at the root.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner {
            automaton: self,
            state: ROOT,
        }
    }
}

/// Live scanning state over a borrowed [`Automaton`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    state: NodeId,
}

impl<'a> Scanner<'a> {
    /// Current state.
    pub fn state(&self) -> NodeId {
        self.state
    }

    /// Moves back to the root.
    pub fn reset(&mut self) {
        self.state = ROOT;
    }

    /// Feeds one text symbol and returns the labels of every string that ends
    /// at it.
    #[inline]
    pub fn make_transition(&mut self, symbol: u8) -> &'a [u32] {
        let automaton = self.automaton;
        let Some(index) = automaton.trie.alphabet().index(symbol) else {
            // No string contains this symbol
            self.state = ROOT;
            return automaton.labels(ROOT);
        };

        self.state = match &automaton.dense {
            Some(table) => table[self.state as usize * automaton.trie.alphabet().len() + index],
            None => loop {
                if let Some(next) = automaton.next_index(self.state, index) {
                    break next;
                }
                self.state = automaton.suffix_links[self.state as usize];
            },
        };

        automaton.labels(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn build(strings: &[&str], strategy: ScanStrategy) -> Automaton {
        Automaton::build(Trie::new(Alphabet::lowercase()), strings, strategy).unwrap()
    }

    /// Every `(end position, label)` pair reported over `text`.
    fn hits(automaton: &Automaton, text: &str) -> Vec<(usize, u32)> {
        let mut scanner = automaton.scanner();
        let mut out = Vec::new();
        for (pos, &symbol) in text.as_bytes().iter().enumerate() {
            for &label in scanner.make_transition(symbol) {
                out.push((pos, label));
            }
        }
        out
    }

    #[test]
    fn test_classic_example() {
        let ac = build(&["he", "she", "his", "hers"], ScanStrategy::Links);
        let found = hits(&ac, "ushers");
        // "she" and "he" end at 3, "hers" ends at 5
        assert_eq!(found, vec![(3, 0), (3, 1), (5, 3)]);
    }

    #[test]
    fn test_suffix_links() {
        let ac = build(&["he", "she", "his", "hers"], ScanStrategy::Links);
        let trie = ac.trie();

        let sh = trie.find(b"sh").unwrap();
        let h = trie.find(b"h").unwrap();
        assert_eq!(ac.suffix_link(sh), h);

        let she = trie.find(b"she").unwrap();
        let he = trie.find(b"he").unwrap();
        assert_eq!(ac.suffix_link(she), he);

        assert_eq!(ac.suffix_link(ROOT), ROOT);
        assert_eq!(ac.suffix_link(h), ROOT);
    }

    #[test]
    fn test_suffix_links_decrease_depth() {
        let ac = build(&["abab", "bab", "ab", "b", "aab"], ScanStrategy::Links);
        for node in 1..ac.node_count() as NodeId {
            let link = ac.suffix_link(node);
            assert!(ac.trie().node(link).depth() < ac.trie().node(node).depth());
        }
    }

    #[test]
    fn test_labels_propagate_along_suffix_links() {
        let ac = build(&["abc", "bc", "c", "x"], ScanStrategy::Links);
        let abc = ac.trie().find(b"abc").unwrap();
        assert_eq!(ac.labels(abc), &[0, 1, 2]);

        let bc = ac.trie().find(b"bc").unwrap();
        assert_eq!(ac.labels(bc), &[1, 2]);
    }

    #[test]
    fn test_next_node_partial_and_goto_total() {
        let ac = build(&["ab"], ScanStrategy::Links);
        let a = ac.trie().find(b"a").unwrap();

        assert_eq!(ac.next_node(ROOT, b'z'), Some(ROOT));
        assert_eq!(ac.next_node(a, b'z'), None);
        assert_eq!(ac.goto(a, b'z'), ROOT);
        assert_eq!(ac.goto(a, b'a'), a);
    }

    #[test]
    fn test_symbol_outside_alphabet_resets() {
        let ac = build(&["ab"], ScanStrategy::Links);
        let mut scanner = ac.scanner();
        scanner.make_transition(b'a');
        assert_ne!(scanner.state(), ROOT);
        assert!(scanner.make_transition(b'-').is_empty());
        assert_eq!(scanner.state(), ROOT);
        assert_eq!(hits(&ac, "a-b ab"), vec![(5, 0)]);
    }

    #[test]
    fn test_dense_matches_links() {
        let strings = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
        let links = build(&strings, ScanStrategy::Links);
        let dense = build(&strings, ScanStrategy::Dense);
        assert_eq!(dense.strategy(), ScanStrategy::Dense);

        let text = "abccabbcaabcabacbcaaab";
        assert_eq!(hits(&links, text), hits(&dense, text));
    }

    #[test]
    fn test_rejects_symbol_outside_alphabet() {
        let result = Automaton::build(
            Trie::new(Alphabet::lowercase()),
            &["ok", "Bad"],
            ScanStrategy::Links,
        );
        assert!(matches!(result, Err(WildscanError::InvalidPattern(_))));
    }

    #[test]
    fn test_empty_string_set() {
        let ac = build(&[], ScanStrategy::Links);
        assert_eq!(ac.node_count(), 1);
        assert!(hits(&ac, "anything").is_empty());
    }
}
