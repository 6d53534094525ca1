//! Output buffer used while replacing keywords.
//!
//! Both replacement policies emit characters as they are scanned and later take back the trailing
//! characters that turn out to belong to a keyword. Since the output is UTF-8, taking back `n`
//! characters requires knowing where each of them starts. [`Output`] records those offsets for
//! every counted character, while preserved skip characters are written without one so that they
//! never count towards a truncation.

use alloc::{string::String, vec::Vec};

#[derive(Debug, Default)]
pub(crate) struct Output {
    text: String,
    /// Byte offsets at which each counted character starts.
    marks: Vec<usize>,
    /// Byte offset of the uncounted characters written since the last counted character or
    /// [`mark_tail()`](Output::mark_tail).
    tail: usize,
}

impl Output {
    /// Reserves `capacity` bytes of text. Offsets are only recorded as characters are written.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            marks: Vec::new(),
            tail: 0,
        }
    }

    /// Appends a counted character.
    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.marks.push(self.text.len());
        self.text.push(c);
        self.tail = self.text.len();
    }

    /// Appends a character that is not counted by [`truncate()`](Output::truncate).
    #[inline]
    pub(crate) fn push_uncounted(&mut self, c: char) {
        self.text.push(c);
    }

    /// Appends text that is not counted by [`truncate()`](Output::truncate).
    #[inline]
    pub(crate) fn push_uncounted_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Appends replacement text, counting each of its characters.
    pub(crate) fn push_str(&mut self, s: &str) {
        let start = self.text.len();
        self.marks
            .extend(s.char_indices().map(|(index, _)| start + index));
        self.text.push_str(s);
        self.tail = self.text.len();
    }

    /// Starts a new run of trailing uncounted characters at the current end of the text.
    #[inline]
    pub(crate) fn mark_tail(&mut self) {
        self.tail = self.text.len();
    }

    /// Removes and returns the uncounted characters written since the tail was last marked.
    pub(crate) fn split_tail(&mut self) -> String {
        self.text.split_off(self.tail)
    }

    /// Removes the last `count` counted characters along with everything written after the first
    /// of them.
    ///
    /// Truncation stops at the start of the buffer.
    pub(crate) fn truncate(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let keep = self.marks.len().saturating_sub(count);
        if let Some(&start) = self.marks.get(keep) {
            self.text.truncate(start);
            self.marks.truncate(keep);
            self.tail = start;
        }
    }

    #[inline]
    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
