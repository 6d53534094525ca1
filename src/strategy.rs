//! Replacement strategies for censoring matched keywords.
//!
//! A [`ReplaceStrategy`] maps each matched keyword to the text written in its place. Any
//! `Fn(&str) -> String` is a strategy, so closures and function pointers can be passed directly.
//!
//! The macros here create closures for the most common cases.
//!
//! # Examples
//! Replacing every character of a keyword with `#`:
//!
//! ```
//! use keyword_filter::{strategy, Automaton};
//!
//! let automaton = Automaton::from_keywords(["foo"]).unwrap();
//!
//! assert_eq!(automaton.replace("a foo", &strategy::replace_chars_with!("#")), "a ###");
//! ```
//!
//! The same thing, written as a closure:
//!
//! ```
//! use keyword_filter::Automaton;
//!
//! let automaton = Automaton::from_keywords(["foo"]).unwrap();
//!
//! assert_eq!(
//!     automaton.replace("a foo", &|keyword: &str| keyword.chars().map(|_| '#').collect::<String>()),
//!     "a ###"
//! );
//! ```

#[doc(hidden)]
pub use alloc::{borrow::ToOwned, string::String};
#[cfg(feature = "unicode-segmentation")]
#[doc(hidden)]
pub use unicode_segmentation::UnicodeSegmentation;

/// Maps a matched keyword to its replacement text.
///
/// Called once per replaced occurrence with the keyword exactly as it was added to the
/// [`AutomatonBuilder`]. Implementations should be pure.
///
/// [`AutomatonBuilder`]: crate::AutomatonBuilder
pub trait ReplaceStrategy {
    /// Returns the text to write in place of `keyword`.
    fn replace_with(&self, keyword: &str) -> String;
}

impl<F> ReplaceStrategy for F
where
    F: Fn(&str) -> String + ?Sized,
{
    #[inline]
    fn replace_with(&self, keyword: &str) -> String {
        self(keyword)
    }
}

/// Creates a strategy replacing every character with the given string.
///
/// # Example
/// ```
/// use keyword_filter::{strategy, Automaton};
///
/// let automaton = Automaton::from_keywords(["foo"]).unwrap();
///
/// assert_eq!(automaton.replace("foo", &strategy::replace_chars_with!("#")), "###");
/// ```
#[macro_export]
macro_rules! _replace_chars_with {
    ($s:literal) => {
        |keyword: &str| {
            keyword.chars().fold(
                $crate::strategy::String::with_capacity(keyword.len()),
                |mut accumulator, _char| {
                    accumulator.push_str($s);
                    accumulator
                },
            )
        }
    };
}

#[doc(inline)]
pub use _replace_chars_with as replace_chars_with;

/// Creates a strategy replacing every grapheme with the given string.
///
/// # Example
/// ```
/// use keyword_filter::{strategy, Automaton};
///
/// let automaton = Automaton::from_keywords(["bãr"]).unwrap();
///
/// assert_eq!(automaton.replace("bãr", &strategy::replace_graphemes_with!("#")), "###");
/// ```
#[cfg(feature = "unicode-segmentation")]
#[macro_export]
macro_rules! _replace_graphemes_with {
    ($s:literal) => {
        |keyword: &str| {
            use $crate::strategy::UnicodeSegmentation;
            keyword.graphemes(true).fold(
                $crate::strategy::String::with_capacity(keyword.len()),
                |mut accumulator, _cluster| {
                    accumulator.push_str($s);
                    accumulator
                },
            )
        }
    };
}

#[cfg(feature = "unicode-segmentation")]
#[doc(inline)]
pub use _replace_graphemes_with as replace_graphemes_with;

/// Creates a strategy replacing the full matched keyword with the given string.
///
/// # Example
/// ```
/// use keyword_filter::{strategy, Automaton};
///
/// let automaton = Automaton::from_keywords(["foo"]).unwrap();
///
/// assert_eq!(
///     automaton.replace("Should censor foo.", &strategy::replace_words_with!("<censored>")),
///     "Should censor <censored>."
/// );
/// ```
#[macro_export]
macro_rules! _replace_words_with {
    ($s:literal) => {
        |_keyword: &str| {
            use $crate::strategy::ToOwned;
            $s.to_owned()
        }
    };
}

#[doc(inline)]
pub use _replace_words_with as replace_words_with;
