//! `PresenceSet` struct and core implementation.

use crate::{
    Domain, Error,
    iter::Iter,
    storage::{WORD_BITS, Word, WordVec, bitpos},
};

/// A set of integers stored as one bit per element.
///
/// # Overview
///
/// Bit `j` of word `i` represents the element `origin + i * WORD_BITS + j`,
/// where the origin is `0` for an [unbounded](Domain::Unbounded) set and
/// `start` for a [windowed](Domain::Window) one. Storage grows only as far
/// as the highest element ever inserted, so a set holding `{3, 1_000_000}`
/// costs about 125 KB while a set holding `{0..64}` costs a single word.
///
/// The number of elements is tracked incrementally and is always exact,
/// including after set algebra.
///
/// # Examples
///
/// ```
/// use packset::PresenceSet;
///
/// let mut set = PresenceSet::new();
/// for x in [-1, 0, 1, 2, 10_000] {
///     set.insert(x);
/// }
///
/// // Negative elements are outside the unbounded domain
/// assert_eq!(set.len(), 4);
/// assert!(!set.contains(-1));
/// assert_eq!(set.to_string(), "{0 1 2 10000}");
/// ```
#[derive(Clone)]
pub struct PresenceSet {
    pub(crate) len: usize,
    pub(crate) domain: Domain,
    pub(crate) words: WordVec,
}

impl PresenceSet {
    /// Creates an empty set over the non-negative integers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::{Domain, PresenceSet};
    /// let set = PresenceSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.domain(), Domain::Unbounded);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_domain(Domain::Unbounded)
    }

    /// Creates an empty set restricted to `[start, end)`.
    ///
    /// Windowed sets store element `start` at bit zero, so a window far from
    /// zero costs no more than one starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWindow`] if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::with_window(-1, 3)?;
    /// for x in [-1, 0, 1, 2, 10_000] {
    ///     set.insert(x);
    /// }
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains(-1));
    /// assert!(!set.contains(10_000));
    ///
    /// assert!(PresenceSet::with_window(3, -1).is_err());
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn with_window(start: i64, end: i64) -> Result<Self, Error> {
        Ok(Self::with_domain(Domain::window(start, end)?))
    }

    /// Creates an empty set over an already validated domain.
    #[must_use]
    pub const fn with_domain(domain: Domain) -> Self {
        Self {
            len: 0,
            domain,
            words: WordVec::new(),
        }
    }

    /// Returns the domain this set was created with.
    #[must_use]
    #[inline]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the number of elements in the set. This is O(1).
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `x` is in the set.
    ///
    /// Elements outside the domain are never present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::new();
    /// set.insert(42);
    ///
    /// assert!(set.contains(42));
    /// assert!(!set.contains(43));
    /// assert!(!set.contains(1_000_000)); // Beyond storage
    /// assert!(!set.contains(-42)); // Outside the domain
    /// ```
    #[must_use]
    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        let Some(offset) = self.domain.offset(x) else {
            return false;
        };
        let (wi, bi) = bitpos(offset);
        self.words.get(wi) & (1 << bi) != 0
    }

    /// Adds `x` to the set.
    ///
    /// Returns `true` if `x` was not already present. Elements outside the
    /// domain are ignored and return `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert!(!set.insert(-7));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, x: i64) -> bool {
        let Some(offset) = self.domain.offset(x) else {
            return false;
        };
        let (wi, bi) = bitpos(offset);
        self.words.ensure(wi);

        let mask: Word = 1 << bi;
        if self.words[wi] & mask != 0 {
            return false;
        }
        self.words[wi] |= mask;
        self.len += 1;
        true
    }

    /// Removes `x` from the set.
    ///
    /// Returns `true` if `x` was present. Removing never grows storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::new();
    /// set.insert(7);
    /// assert!(set.remove(7));
    /// assert!(!set.remove(7));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, x: i64) -> bool {
        let Some(offset) = self.domain.offset(x) else {
            return false;
        };
        let (wi, bi) = bitpos(offset);
        let Some(word) = self.words.get_mut(wi) else {
            return false;
        };

        let mask: Word = 1 << bi;
        if *word & mask == 0 {
            return false;
        }
        *word &= !mask;
        self.len -= 1;
        true
    }

    /// Removes every element, keeping the domain.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::with_window(100, 200)?;
    /// set.insert(150);
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert!(!set.contains(150));
    /// assert!(set.insert(150));
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<i64> {
        self.iter().next()
    }

    /// Returns the largest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let set: PresenceSet = [5, 10_000, 64].into_iter().collect();
    /// assert_eq!(set.first(), Some(5));
    /// assert_eq!(set.last(), Some(10_000));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        let words = self.words.as_slice_rtrim();
        let wi = words.len().checked_sub(1)?;
        let bi = WORD_BITS - 1 - words[wi].leading_zeros() as usize;
        Some(self.domain.element(wi * WORD_BITS + bi))
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut set = PresenceSet::with_window(-10, 10)?;
    /// set.insert(3);
    /// set.insert(-10);
    /// set.insert(0);
    ///
    /// let elements: Vec<i64> = set.iter().collect();
    /// assert_eq!(elements, vec![-10, 0, 3]);
    /// # Ok::<(), packset::Error>(())
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words, self.domain)
    }

    /// The backing words, including any trailing zero words.
    ///
    /// Bit `j` of word `i` is element `domain().origin() + i * WORD_BITS + j`.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// Recounts the elements from the backing words.
    pub(crate) fn recount(&mut self) {
        self.len = self.words.count_ones();
    }
}
