//! Walker for [`Automaton`] internal searching.
//!
//! [`Walker`] holds the scan state of a single pass over some input: the node the automaton is
//! currently in. Every matching operation drives one `Walker` through the input one character at a
//! time, so concurrent searches over the same `Automaton` never share any state.
//!
//! [`Automaton`]: crate::Automaton

use crate::node::{Node, NodeId, ROOT};
use alloc::string::String;

/// A cursor over an automaton's node arena.
#[derive(Clone, Debug)]
pub(crate) struct Walker<'a> {
    nodes: &'a [Node],
    node: NodeId,
}

impl<'a> Walker<'a> {
    /// Creates a new `Walker` positioned at the root.
    #[inline]
    pub(crate) fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, node: ROOT }
    }

    /// Returns the `Walker` to the root.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.node = ROOT;
    }

    /// Step the `Walker` along the character `c`.
    ///
    /// Failure links are followed until a node with a `c` edge is found or the root is reached. The
    /// edge is then taken if it exists, and otherwise the `Walker` stays at the root. Each failure
    /// hop shortens the matched prefix, so a full scan takes amortized linear time.
    ///
    /// Returns the keywords terminating exactly at the resulting node.
    pub(crate) fn step(&mut self, c: char) -> &'a [String] {
        let nodes = self.nodes;
        let mut node = self.node;
        while nodes[node].get(c).is_none() && node != ROOT {
            match nodes[node].fail {
                Some(fail) => node = fail,
                None => break,
            }
        }
        self.node = nodes[node].get(c).unwrap_or(ROOT);
        &nodes[self.node].results
    }
}
