//! Errors raised while building an [`Automaton`].
//!
//! [`Automaton`]: crate::Automaton

use alloc::string::String;

/// An error encountered while adding keywords to an [`AutomatonBuilder`].
///
/// Misuse of the build phase itself (adding after compilation, matching before it) is ruled out by
/// the types and therefore has no runtime variant.
///
/// [`AutomatonBuilder`]: crate::AutomatonBuilder
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The keyword was empty or consisted only of whitespace.
    #[error("invalid keyword {keyword:?}: keywords must not be empty or blank")]
    InvalidKeyword {
        /// The rejected keyword, as it was passed in.
        keyword: String,
    },
}
