//! Node type for the automaton's internal directional graph.
//!
//! The graph defined by these nodes is a trie with one extra edge per node: the failure link.
//! Child edges are labeled by characters and are owned by their parent. Failure links point
//! backwards or sideways across the trie, so every node lives in a flat arena and all edges are
//! stored as arena indices rather than references.
//!
//! [`NodeRef`] is a read-only view into a compiled arena, exposed for inspection and debugging.

use alloc::{string::String, vec::Vec};
use core::{fmt, ptr};
use hashbrown::HashMap;

/// Index of a node within its arena.
pub(crate) type NodeId = usize;

/// The root node is always the first node allocated.
pub(crate) const ROOT: NodeId = 0;

/// A single automaton state.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// All children, keyed by character edges.
    pub(crate) children: HashMap<char, NodeId>,
    /// The failure link.
    ///
    /// `None` for the root, and for every other node until failure links are compiled.
    pub(crate) fail: Option<NodeId>,
    /// Keywords terminating exactly at this node, in insertion order.
    ///
    /// Keywords reachable only through the failure chain are not inherited here.
    pub(crate) results: Vec<String>,
}

impl Node {
    /// Existing-child lookup. Never creates a node.
    #[inline]
    pub(crate) fn get(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// Outgoing edges sorted by character, giving a stable traversal order.
    pub(crate) fn sorted_children(&self) -> Vec<(char, NodeId)> {
        let mut children = self
            .children
            .iter()
            .map(|(c, id)| (*c, *id))
            .collect::<Vec<_>>();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }

    /// Records `keyword` as terminating here, keeping set semantics.
    ///
    /// Returns whether the keyword was newly inserted.
    pub(crate) fn add_result(&mut self, keyword: &str) -> bool {
        if self.results.iter().any(|result| result == keyword) {
            return false;
        }
        self.results.push(keyword.into());
        true
    }
}

/// Walk from `from` along `chars`, creating missing children, and return the terminal node.
pub(crate) fn extend<I>(nodes: &mut Vec<Node>, from: NodeId, chars: I) -> NodeId
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().fold(from, |id, c| match nodes[id].get(c) {
        Some(child) => child,
        None => {
            let child = nodes.len();
            nodes.push(Node::default());
            nodes[id].children.insert(c, child);
            child
        }
    })
}

/// A borrowed, read-only view of one state in a compiled [`Automaton`].
///
/// Obtained through [`Automaton::root()`], and navigated with [`get()`] and [`fail()`].
///
/// ```
/// use keyword_filter::Automaton;
///
/// let automaton = Automaton::from_keywords(["he", "she"]).unwrap();
/// let she = automaton.root().get('s').and_then(|n| n.get('h')).and_then(|n| n.get('e')).unwrap();
///
/// assert_eq!(she.results().collect::<Vec<_>>(), vec!["she"]);
/// assert_eq!(she.fail().unwrap().results().collect::<Vec<_>>(), vec!["he"]);
/// ```
///
/// [`Automaton`]: crate::Automaton
/// [`Automaton::root()`]: crate::Automaton::root
/// [`get()`]: NodeRef::get
/// [`fail()`]: NodeRef::fail
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    nodes: &'a [Node],
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub(crate) fn new(nodes: &'a [Node], id: NodeId) -> Self {
        Self { nodes, id }
    }

    #[inline]
    fn node(&self) -> &'a Node {
        &self.nodes[self.id]
    }

    /// Follow the child edge labeled `c`, if there is one.
    pub fn get(self, c: char) -> Option<NodeRef<'a>> {
        self.node().get(c).map(|id| Self::new(self.nodes, id))
    }

    /// Follow the failure link.
    ///
    /// Returns `None` only for the root.
    pub fn fail(self) -> Option<NodeRef<'a>> {
        self.node().fail.map(|id| Self::new(self.nodes, id))
    }

    /// The keywords terminating exactly at this node.
    pub fn results(self) -> impl Iterator<Item = &'a str> {
        self.node().results.iter().map(String::as_str)
    }

    /// The characters of all outgoing child edges, in ascending order.
    pub fn keys(self) -> Vec<char> {
        self.node()
            .sorted_children()
            .into_iter()
            .map(|(c, _)| c)
            .collect()
    }

    /// Whether this is the root node.
    #[inline]
    pub fn is_root(self) -> bool {
        self.id == ROOT
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("results", &self.node().results)
            .field("keys", &self.keys())
            .field("fail", &self.node().fail)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{extend, Node, NodeRef, ROOT};
    use alloc::{vec, vec::Vec};

    fn arena() -> Vec<Node> {
        vec![Node::default()]
    }

    #[test]
    fn extend_creates_path() {
        let mut nodes = arena();
        let end = extend(&mut nodes, ROOT, "foo".chars());

        assert_eq!(nodes.len(), 4);
        assert_eq!(end, 3);
        assert_eq!(nodes[ROOT].get('f'), Some(1));
        assert_eq!(nodes[1].get('o'), Some(2));
        assert_eq!(nodes[2].get('o'), Some(3));
    }

    #[test]
    fn extend_reuses_shared_prefix() {
        let mut nodes = arena();
        let foo = extend(&mut nodes, ROOT, "foo".chars());
        let fob = extend(&mut nodes, ROOT, "fob".chars());
        let fo = extend(&mut nodes, ROOT, "fo".chars());

        assert_ne!(foo, fob);
        assert_eq!(nodes.len(), 5);
        assert_eq!(fo, 2);
    }

    #[test]
    fn extend_empty_returns_start() {
        let mut nodes = arena();

        assert_eq!(extend(&mut nodes, ROOT, "".chars()), ROOT);
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn get_does_not_create() {
        let nodes = arena();

        assert_eq!(nodes[ROOT].get('a'), None);
        assert!(nodes[ROOT].children.is_empty());
    }

    #[test]
    fn add_result_is_a_set() {
        let mut node = Node::default();
        assert!(node.add_result("foo"));
        assert!(!node.add_result("foo"));

        assert_eq!(node.results, vec!["foo"]);
    }

    #[test]
    fn sorted_children() {
        let mut nodes = arena();
        extend(&mut nodes, ROOT, "c".chars());
        extend(&mut nodes, ROOT, "a".chars());
        extend(&mut nodes, ROOT, "b".chars());

        assert_eq!(
            nodes[ROOT]
                .sorted_children()
                .into_iter()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            vec!['a', 'b', 'c']
        );
    }

    #[test]
    fn node_ref_navigation() {
        let mut nodes = arena();
        let end = extend(&mut nodes, ROOT, "ab".chars());
        nodes[end].add_result("ab");
        nodes[end].fail = Some(ROOT);

        let root = NodeRef::new(&nodes, ROOT);
        let ab = root.get('a').and_then(|a| a.get('b')).unwrap();

        assert!(root.is_root());
        assert!(!ab.is_root());
        assert_eq!(root.keys(), vec!['a']);
        assert_eq!(ab.results().collect::<Vec<_>>(), vec!["ab"]);
        assert_eq!(ab.fail(), Some(root));
        assert_eq!(root.fail(), None);
        assert!(root.get('b').is_none());
    }
}
