//! Packed word storage shared by every set in the crate.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

/// The unit of packed storage: one native machine word.
pub type Word = usize;

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Convert a bit index to (word index, bit position within word).
#[inline(always)]
pub(crate) const fn bitpos(idx: usize) -> (usize, usize) {
    (idx / WORD_BITS, idx % WORD_BITS)
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[Word]) -> &[Word] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}

/// A growable vector of words that reads as zero past its stored length.
///
/// Logically the vector is infinite: [`get`](Self::get) returns `0` for any
/// index that was never written. Physically only the words up to the
/// highest index ever passed to [`ensure`](Self::ensure) are stored, and
/// growth is exact-to-need rather than geometric.
///
/// # Examples
///
/// ```
/// use packset::storage::WordVec;
///
/// let mut words = WordVec::new();
/// assert_eq!(words.get(10), 0);
/// assert!(words.is_empty());
///
/// words.ensure(3);
/// words[3] = 0b101;
/// assert_eq!(words.len(), 4);
/// assert_eq!(words.get(3), 0b101);
/// assert_eq!(words.count_ones(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordVec {
    words: Vec<Word>,
}

impl WordVec {
    /// Creates an empty word vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Returns the word at `i`, or `0` if `i` is beyond the stored length.
    #[must_use]
    #[inline(always)]
    pub fn get(&self, i: usize) -> Word {
        self.words.get(i).copied().unwrap_or(0)
    }

    /// Makes sure index `i` is backed by storage, appending zero words until
    /// the stored length is `i + 1`.
    #[inline]
    pub fn ensure(&mut self, i: usize) {
        if i >= self.words.len() {
            self.grow(i + 1);
        }
    }

    #[cold]
    fn grow(&mut self, new_len: usize) {
        tracing::trace!(from = self.words.len(), to = new_len, "growing word vector");
        self.words.resize(new_len, 0);
    }

    /// Drops every word at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        self.words.truncate(len);
    }

    /// Drops all words and releases the allocation.
    pub fn clear(&mut self) {
        self.words = Vec::new();
    }

    /// Extends the vector with a copy of `slice`.
    pub(crate) fn extend_from_slice(&mut self, slice: &[Word]) {
        if !slice.is_empty() {
            tracing::trace!(
                from = self.words.len(),
                to = self.words.len() + slice.len(),
                "growing word vector"
            );
            self.words.extend_from_slice(slice);
        }
    }

    /// Total number of set bits across every stored word.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// The stored words with trailing zero words removed.
    #[must_use]
    pub fn as_slice_rtrim(&self) -> &[Word] {
        rtrim0(&self.words)
    }
}

impl Deref for WordVec {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl DerefMut for WordVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.words
    }
}

impl AsRef<[Word]> for WordVec {
    fn as_ref(&self) -> &[Word] {
        self
    }
}

impl From<Vec<Word>> for WordVec {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl core::fmt::Debug for WordVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.words.iter()).finish()
    }
}
