use crate::{
    node::{self, Node, NodeId, ROOT},
    Automaton, Error, SkipMode,
};
use alloc::{collections::VecDeque, string::ToString, vec, vec::Vec};
use hashbrown::HashSet;

/// The build phase of an [`Automaton`].
///
/// Keywords and skip characters are collected here, and [`compile()`] then links failure paths and
/// produces the immutable `Automaton`. Because `compile()` consumes the builder, keywords can never
/// be added to an automaton that has already been compiled:
///
/// ```compile_fail
/// use keyword_filter::AutomatonBuilder;
///
/// let mut builder = AutomatonBuilder::new();
/// builder.add("foo").unwrap();
/// let automaton = builder.compile();
///
/// builder.add("bar").unwrap();
/// ```
///
/// Likewise, an uncompiled builder has no matching operations at all:
///
/// ```compile_fail
/// use keyword_filter::AutomatonBuilder;
///
/// let mut builder = AutomatonBuilder::new();
/// builder.add("foo").unwrap();
///
/// builder.contains_keyword("foo");
/// ```
///
/// [`compile()`]: AutomatonBuilder::compile
#[derive(Debug)]
pub struct AutomatonBuilder {
    nodes: Vec<Node>,
    keyword_count: usize,
    skip_chars: HashSet<char>,
    skip_mode: SkipMode,
}

impl AutomatonBuilder {
    /// Creates an empty builder containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            keyword_count: 0,
            skip_chars: HashSet::new(),
            skip_mode: SkipMode::default(),
        }
    }

    /// Adds a keyword to the dictionary.
    ///
    /// The keyword is matched exactly, character by character and case-sensitively, and is reported
    /// to [`ReplaceStrategy`]s exactly as given here.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKeyword`] if `keyword` is empty or contains only whitespace.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::AutomatonBuilder;
    ///
    /// let mut builder = AutomatonBuilder::new();
    /// builder.add("foo").unwrap().add("bar").unwrap();
    ///
    /// assert!(builder.add("   ").is_err());
    /// ```
    ///
    /// [`ReplaceStrategy`]: crate::ReplaceStrategy
    pub fn add(&mut self, keyword: &str) -> Result<&mut Self, Error> {
        if keyword.trim().is_empty() {
            return Err(Error::InvalidKeyword {
                keyword: keyword.to_string(),
            });
        }
        let last = node::extend(&mut self.nodes, ROOT, keyword.chars());
        if self.nodes[last].add_result(keyword) {
            self.keyword_count += 1;
        }
        tracing::trace!(keyword, "added keyword");
        Ok(self)
    }

    /// Adds every keyword in `keywords`, stopping at the first invalid one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKeyword`] for the first empty or blank keyword. Keywords preceding it
    /// remain added.
    pub fn add_all<I, S>(&mut self, keywords: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.add(keyword.as_ref())?;
        }
        Ok(self)
    }

    /// Adds a character to be ignored while matching.
    #[inline]
    pub fn add_skip_char(&mut self, c: char) -> &mut Self {
        self.skip_chars.insert(c);
        self
    }

    /// Adds a collection of characters to be ignored while matching.
    #[inline]
    pub fn add_skip_chars<I>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        self.skip_chars.extend(chars);
        self
    }

    /// Sets how skipped characters are treated in replacement output.
    #[inline]
    pub fn skip_mode(&mut self, skip_mode: SkipMode) -> &mut Self {
        self.skip_mode = skip_mode;
        self
    }

    /// Links failure paths and produces the query-phase [`Automaton`].
    pub fn compile(mut self) -> Automaton {
        link_failures(&mut self.nodes);
        tracing::debug!(
            nodes = self.nodes.len(),
            keywords = self.keyword_count,
            skip_chars = self.skip_chars.len(),
            "compiled automaton"
        );
        Automaton {
            nodes: self.nodes.into_boxed_slice(),
            keyword_count: self.keyword_count,
            skip_chars: self.skip_chars,
            skip_mode: self.skip_mode,
        }
    }
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets the failure link of every non-root node with a breadth-first traversal.
///
/// Each node's link is the node spelling the longest proper suffix of its own path that is also a
/// path from the root. Results are not propagated along the links.
fn link_failures(nodes: &mut [Node]) {
    let mut queue = VecDeque::new();
    for (_, child) in nodes[ROOT].sorted_children() {
        nodes[child].fail = Some(ROOT);
        queue.push_back(child);
    }

    while let Some(id) = queue.pop_front() {
        for (c, child) in nodes[id].sorted_children() {
            queue.push_back(child);

            let mut fallback = nodes[id].fail;
            while let Some(candidate) = fallback {
                if nodes[candidate].get(c).is_some() {
                    break;
                }
                fallback = nodes[candidate].fail;
            }
            nodes[child].fail = Some(
                fallback
                    .and_then(|candidate: NodeId| nodes[candidate].get(c))
                    .unwrap_or(ROOT),
            );
        }
    }
}
