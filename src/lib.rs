//! A keyword automaton for detecting and replacing banned words in text.
//!
//! An [`Automaton`] is an Aho-Corasick trie: every keyword is a path from the root, and every node
//! carries a failure link to the node spelling the longest proper suffix of its own path. A mismatch
//! follows failure links instead of restarting, so any text is scanned in a single left-to-right
//! pass no matter how the keywords overlap.
//!
//! Building happens in two phases. Keywords and skip characters are collected in an
//! [`AutomatonBuilder`], which is then compiled into an immutable `Automaton`. A compiled
//! `Automaton` only ever reads its own graph, so it can be shared freely between threads.
//!
//! # Example
//! ```
//! use keyword_filter::{strategy, AutomatonBuilder};
//!
//! let mut builder = AutomatonBuilder::new();
//! builder.add_all(["foo", "bar"]).unwrap().add_skip_char('-');
//! let automaton = builder.compile();
//!
//! assert!(automaton.contains_keyword("f-o-o"));
//! assert_eq!(automaton.replace("a bar", &strategy::replace_chars_with!("*")), "a ***");
//! ```
//!
//! Matching is exact: characters are compared as Unicode scalar values, case-sensitively and
//! without any normalization.

#![no_std]

extern crate alloc;

mod buffer;
mod builder;
mod error;
mod node;
mod walker;

pub mod strategy;

pub use builder::AutomatonBuilder;
pub use error::Error;
pub use node::NodeRef;
pub use strategy::ReplaceStrategy;

use alloc::{boxed::Box, string::String};
use buffer::Output;
use core::fmt;
use hashbrown::HashSet;
use node::{Node, ROOT};
use walker::Walker;

/// How skipped characters are treated in replacement output.
///
/// Skip characters never take part in matching. This decides whether they survive in the text
/// returned by [`Automaton::replace()`] and [`Automaton::replace_legacy()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipMode {
    /// Skipped characters are dropped from the output entirely.
    Elide,
    /// Skipped characters are copied to the output, unless they fall within a replaced keyword.
    Preserve,
}

impl Default for SkipMode {
    fn default() -> Self {
        SkipMode::Elide
    }
}

/// The algorithm used to replace keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Replace as soon as any keyword completes, then restart from the root.
    ///
    /// Among keywords sharing a prefix, the shortest one wins: with both `ab` and `abc` in the
    /// dictionary, `xabcx` becomes `x*cx`.
    Minimal,
    /// Defer replacement while consecutive characters keep completing keywords, and never restart
    /// from the root.
    ///
    /// This is the older algorithm. It produces surprising output when keywords overlap (for
    /// example `ab` with `abc`, or `ab` with `cab`), and is kept for callers depending on its exact
    /// output.
    Deferred,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Minimal
    }
}

/// A compiled keyword automaton.
///
/// Created by [`AutomatonBuilder::compile()`], or directly from a list of keywords with
/// [`Automaton::from_keywords()`].
#[derive(Debug)]
pub struct Automaton {
    pub(crate) nodes: Box<[Node]>,
    pub(crate) keyword_count: usize,
    pub(crate) skip_chars: HashSet<char>,
    pub(crate) skip_mode: SkipMode,
}

impl Automaton {
    /// Builds and compiles an automaton containing `keywords` and no skip characters.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKeyword`] if any keyword is empty or blank.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::Automaton;
    ///
    /// let automaton = Automaton::from_keywords(["foo", "bar"]).unwrap();
    ///
    /// assert!(automaton.contains_keyword("foobar"));
    /// assert!(Automaton::from_keywords(["foo", ""]).is_err());
    /// ```
    pub fn from_keywords<I, S>(keywords: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AutomatonBuilder::new();
        builder.add_all(keywords)?;
        Ok(builder.compile())
    }

    #[inline]
    fn is_skipped(&self, c: char) -> bool {
        self.skip_chars.contains(&c)
    }

    #[inline]
    fn write_skipped(&self, output: &mut Output, c: char) {
        match self.skip_mode {
            SkipMode::Elide => {}
            SkipMode::Preserve => output.push_uncounted(c),
        }
    }

    /// Check whether `text` contains any keyword.
    ///
    /// Skip characters are ignored. Returns as soon as the first keyword is found.
    ///
    /// Only keywords ending exactly at the node reached by the scan are seen. A keyword that is a
    /// proper substring of a longer keyword can therefore be missed while the scan is inside the
    /// longer one.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::Automaton;
    ///
    /// let automaton = Automaton::from_keywords(["he", "she", "his", "hers"]).unwrap();
    ///
    /// assert!(automaton.contains_keyword("ushers"));
    /// assert!(!automaton.contains_keyword("hi"));
    /// ```
    pub fn contains_keyword(&self, text: &str) -> bool {
        let mut walker = Walker::new(&self.nodes);
        text.chars()
            .filter(|c| !self.is_skipped(*c))
            .any(|c| !walker.step(c).is_empty())
    }

    /// Finds all keywords reported while scanning `text`, in scan order.
    ///
    /// Uses the same scan as [`contains_keyword()`](Automaton::contains_keyword), without stopping
    /// at the first keyword. A keyword occurring several times is yielded each time.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::Automaton;
    ///
    /// let automaton = Automaton::from_keywords(["he", "she", "his", "hers"]).unwrap();
    ///
    /// assert_eq!(automaton.find("ushers").collect::<Vec<_>>(), vec!["she", "hers"]);
    /// ```
    pub fn find<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let mut walker = Walker::new(&self.nodes);
        text.chars()
            .filter(move |c| !self.is_skipped(*c))
            .flat_map(move |c| walker.step(c).iter().map(String::as_str))
    }

    /// Replace keywords within `text` using the [`MatchPolicy::Minimal`] policy.
    ///
    /// Each keyword is replaced by `strategy` as soon as its last character is scanned, after which
    /// scanning restarts from the root. Skip characters are handled according to the
    /// [`SkipMode`]. The output is not scanned again.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::{strategy, Automaton};
    ///
    /// let automaton = Automaton::from_keywords(["ab", "abc"]).unwrap();
    ///
    /// assert_eq!(automaton.replace("xabcx", &strategy::replace_words_with!("*")), "x*cx");
    /// ```
    pub fn replace<S>(&self, text: &str, strategy: &S) -> String
    where
        S: ReplaceStrategy + ?Sized,
    {
        self.replace_with_policy(text, MatchPolicy::Minimal, strategy)
    }

    /// Replace keywords within `text` using the [`MatchPolicy::Deferred`] policy.
    ///
    /// Prefer [`replace()`](Automaton::replace). This policy is unreliable when keywords overlap.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::{strategy, Automaton};
    ///
    /// let automaton = Automaton::from_keywords(["ab", "abc"]).unwrap();
    ///
    /// assert_eq!(automaton.replace_legacy("xabcx", &strategy::replace_words_with!("*")), "x*x");
    /// ```
    pub fn replace_legacy<S>(&self, text: &str, strategy: &S) -> String
    where
        S: ReplaceStrategy + ?Sized,
    {
        self.replace_with_policy(text, MatchPolicy::Deferred, strategy)
    }

    /// Replace keywords within `text` using the given `policy`.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::{strategy, Automaton, MatchPolicy};
    ///
    /// let automaton = Automaton::from_keywords(["ab", "abc"]).unwrap();
    /// let star = strategy::replace_words_with!("*");
    ///
    /// assert_eq!(automaton.replace_with_policy("xabcx", MatchPolicy::Minimal, &star), "x*cx");
    /// assert_eq!(automaton.replace_with_policy("xabcx", MatchPolicy::Deferred, &star), "x*x");
    /// ```
    pub fn replace_with_policy<S>(&self, text: &str, policy: MatchPolicy, strategy: &S) -> String
    where
        S: ReplaceStrategy + ?Sized,
    {
        match policy {
            MatchPolicy::Minimal => self.replace_minimal(text, strategy),
            MatchPolicy::Deferred => self.replace_deferred(text, strategy),
        }
    }

    fn replace_minimal<S>(&self, text: &str, strategy: &S) -> String
    where
        S: ReplaceStrategy + ?Sized,
    {
        let mut output = Output::with_capacity(text.len());
        let mut walker = Walker::new(&self.nodes);

        for c in text.chars() {
            if self.is_skipped(c) {
                self.write_skipped(&mut output, c);
                continue;
            }
            match walker.step(c).first() {
                Some(keyword) => {
                    // `c` itself was never written.
                    output.truncate(keyword.chars().count() - 1);
                    tracing::trace!(keyword = keyword.as_str(), "replacing keyword");
                    output.push_str(&strategy.replace_with(keyword));
                    walker.reset();
                }
                None => output.push(c),
            }
        }

        output.into_string()
    }

    fn replace_deferred<S>(&self, text: &str, strategy: &S) -> String
    where
        S: ReplaceStrategy + ?Sized,
    {
        let mut output = Output::with_capacity(text.len());
        let mut walker = Walker::new(&self.nodes);
        // The latest keyword found, and how many scanned characters have completed keywords since
        // the first of them. None of those characters have been written.
        let mut pending: Option<(&str, usize)> = None;

        for c in text.chars() {
            if self.is_skipped(c) {
                self.write_skipped(&mut output, c);
                continue;
            }
            match walker.step(c).first() {
                Some(keyword) => {
                    let matched = pending.map_or(0, |(_, matched)| matched);
                    pending = Some((keyword.as_str(), matched + 1));
                    output.mark_tail();
                }
                None => {
                    if let Some((keyword, matched)) = pending.take() {
                        Self::flush(&mut output, keyword, matched, strategy);
                    }
                    output.push(c);
                }
            }
        }
        if let Some((keyword, matched)) = pending {
            Self::flush(&mut output, keyword, matched, strategy);
        }

        output.into_string()
    }

    /// Writes the replacement for a deferred keyword.
    ///
    /// The unwritten `matched` characters are subtracted from the keyword's length to find how many
    /// already-written characters to take back. When that count would be negative, nothing is
    /// taken back. Skip characters preserved after the keyword's last character are moved behind
    /// the replacement.
    fn flush<S>(output: &mut Output, keyword: &str, matched: usize, strategy: &S)
    where
        S: ReplaceStrategy + ?Sized,
    {
        let trailing = output.split_tail();
        output.truncate(keyword.chars().count().saturating_sub(matched));
        tracing::trace!(keyword, matched, "replacing deferred keyword");
        output.push_str(&strategy.replace_with(keyword));
        output.push_uncounted_str(&trailing);
    }

    /// The root node, for inspecting the compiled graph.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(&self.nodes, ROOT)
    }

    /// The number of nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of distinct keywords.
    #[inline]
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// How skipped characters are treated in replacement output.
    #[inline]
    pub fn skip_mode(&self) -> SkipMode {
        self.skip_mode
    }

    /// Returns a printable dump of the whole trie.
    ///
    /// Each line shows one node's results followed by `..` and its outgoing characters, indented by
    /// depth, in depth-first order with edges sorted.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::Automaton;
    ///
    /// let automaton = Automaton::from_keywords(["ab", "b"]).unwrap();
    ///
    /// assert_eq!(automaton.trace().to_string(), "[]..ab\n  []..b\n    [ab]..\n  [b]..\n");
    /// ```
    pub fn trace(&self) -> Trace<'_> {
        Trace { root: self.root() }
    }
}

/// A printable dump of an [`Automaton`]'s trie, created by [`Automaton::trace()`].
#[derive(Clone, Copy, Debug)]
pub struct Trace<'a> {
    root: NodeRef<'a>,
}

impl Trace<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, node: NodeRef<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}[", "", indent = depth * 2)?;
        for (i, result) in node.results().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(result)?;
        }
        f.write_str("]..")?;
        let keys = node.keys();
        for c in &keys {
            write!(f, "{}", c)?;
        }
        f.write_str("\n")?;

        for child in keys.into_iter().filter_map(|c| node.get(c)) {
            Self::write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.root, 0)
    }
}
