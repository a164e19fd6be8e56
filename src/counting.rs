//! `CountingSet` struct and core implementation.

use crate::{
    Domain, Error,
    iter::Counts,
    storage::{WORD_BITS, Word, WordVec},
};

/// A bounded multiset of integers stored as packed saturating counters.
///
/// # Overview
///
/// Each element owns a `width`-bit field, where `width` is the smallest
/// number of bits that can hold `capacity`. Fields are packed
/// `WORD_BITS / width` to a word with slot 0 in the low-order bits; any
/// leftover high bits of a word are unused.
///
/// Counters saturate: [`insert`](Self::insert) stops at `capacity`,
/// [`remove`](Self::remove) stops at zero. [`len`](Self::len) counts the
/// elements whose counter is non-zero.
///
/// Counting sets deliberately have no union or intersection: saturating
/// counters have no single canonical way to combine.
///
/// # Examples
///
/// ```
/// use packset::CountingSet;
///
/// let mut set = CountingSet::new(3)?;
/// for _ in 0..6 {
///     set.insert(2);
/// }
/// assert_eq!(set.count(2), 3);
///
/// set.remove(2);
/// assert_eq!(set.count(2), 2);
///
/// set.remove_all(2);
/// assert_eq!(set.count(2), 0);
/// assert!(set.is_empty());
/// # Ok::<(), packset::Error>(())
/// ```
#[derive(Clone)]
pub struct CountingSet {
    pub(crate) len: usize,
    pub(crate) domain: Domain,
    pub(crate) capacity: usize,
    pub(crate) width: usize,
    pub(crate) slots: usize,
    pub(crate) mask: Word,
    pub(crate) words: WordVec,
}

impl CountingSet {
    /// Largest accepted counter capacity.
    ///
    /// Fields may use every bit of a word but the highest, which keeps at
    /// least one slot per word and leaves the field mask representable.
    pub const MAX_CAPACITY: usize = isize::MAX as usize;

    /// Creates an empty counting set over the non-negative integers whose
    /// counters saturate at `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity == 0` and
    /// [`Error::CapacityTooLarge`] if it exceeds
    /// [`MAX_CAPACITY`](Self::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::{CountingSet, Error};
    /// let set = CountingSet::new(3)?;
    /// assert_eq!(set.width(), 2);
    ///
    /// assert_eq!(CountingSet::new(0).unwrap_err(), Error::ZeroCapacity);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_domain(Domain::Unbounded, capacity)
    }

    /// Creates an empty counting set restricted to `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWindow`] if `start >= end`, or either capacity
    /// error described in [`new`](Self::new).
    pub fn with_window(start: i64, end: i64, capacity: usize) -> Result<Self, Error> {
        Self::with_domain(Domain::window(start, end)?, capacity)
    }

    /// Creates an empty counting set over an already validated domain.
    ///
    /// # Errors
    ///
    /// Returns either capacity error described in [`new`](Self::new).
    pub fn with_domain(domain: Domain, capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            tracing::debug!("rejected zero counter capacity");
            return Err(Error::ZeroCapacity);
        }
        if capacity > Self::MAX_CAPACITY {
            tracing::debug!(capacity, "rejected oversized counter capacity");
            return Err(Error::CapacityTooLarge {
                capacity,
                max: Self::MAX_CAPACITY,
            });
        }

        let width = field_width(capacity);
        Ok(Self {
            len: 0,
            domain,
            capacity,
            width,
            slots: WORD_BITS / width,
            mask: (1 << width) - 1,
            words: WordVec::new(),
        })
    }

    /// Returns the domain this set was created with.
    #[must_use]
    #[inline]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// The saturation point of every counter.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bits used by each counter field.
    #[must_use]
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Counter fields packed into each word.
    #[must_use]
    #[inline]
    pub const fn slots_per_word(&self) -> usize {
        self.slots
    }

    /// Returns the number of elements with a non-zero count. This is O(1).
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if every counter is zero.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps `x` to its (word index, bit shift), or `None` outside the domain.
    #[inline(always)]
    fn locate(&self, x: i64) -> Option<(usize, usize)> {
        let offset = self.domain.offset(x)?;
        Some((offset / self.slots, (offset % self.slots) * self.width))
    }

    #[inline(always)]
    fn field(&self, wi: usize, shift: usize) -> usize {
        (self.words.get(wi) >> shift) & self.mask
    }

    /// Returns how many times `x` is currently counted.
    ///
    /// Elements outside the domain always count zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::CountingSet;
    /// let mut set = CountingSet::with_window(10, 20, 7)?;
    /// set.insert(15);
    /// set.insert(15);
    ///
    /// assert_eq!(set.count(15), 2);
    /// assert_eq!(set.count(16), 0);
    /// assert_eq!(set.count(25), 0);
    /// # Ok::<(), packset::Error>(())
    /// ```
    #[must_use]
    pub fn count(&self, x: i64) -> usize {
        match self.locate(x) {
            Some((wi, shift)) => self.field(wi, shift),
            None => 0,
        }
    }

    /// Returns `true` if `x` has a non-zero count.
    #[must_use]
    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.count(x) != 0
    }

    /// Counts one more occurrence of `x`.
    ///
    /// Returns `true` if the counter was incremented, and `false` if it was
    /// already saturated at [`capacity`](Self::capacity) or `x` is outside
    /// the domain.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::CountingSet;
    /// let mut set = CountingSet::new(1)?;
    /// assert!(set.insert(9));
    /// assert!(!set.insert(9)); // Saturated
    /// assert!(!set.insert(-9)); // Outside the domain
    /// assert_eq!(set.count(9), 1);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn insert(&mut self, x: i64) -> bool {
        let Some((wi, shift)) = self.locate(x) else {
            return false;
        };
        self.words.ensure(wi);

        let v = self.field(wi, shift);
        if v >= self.capacity {
            return false;
        }
        if v == 0 {
            self.len += 1;
        }
        // Multi-bit field: increment arithmetically. v < capacity <= mask, so
        // the carry never leaves the field.
        self.words[wi] += 1 << shift;
        true
    }

    /// Forgets one occurrence of `x`.
    ///
    /// Returns `true` if the counter was decremented. A counter that reaches
    /// zero removes `x` from the set.
    pub fn remove(&mut self, x: i64) -> bool {
        let Some((wi, shift)) = self.locate(x) else {
            return false;
        };
        if self.field(wi, shift) == 0 {
            return false;
        }

        self.words[wi] -= 1 << shift;
        if self.field(wi, shift) == 0 {
            self.len -= 1;
        }
        true
    }

    /// Forgets every occurrence of `x`, returning the previous count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::CountingSet;
    /// let mut set = CountingSet::new(15)?;
    /// set.extend([3, 3, 3, 4]);
    ///
    /// assert_eq!(set.remove_all(3), 3);
    /// assert_eq!(set.remove_all(3), 0);
    /// assert_eq!(set.len(), 1);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn remove_all(&mut self, x: i64) -> usize {
        let Some((wi, shift)) = self.locate(x) else {
            return 0;
        };
        let v = self.field(wi, shift);
        if v == 0 {
            return 0;
        }

        self.words[wi] &= !(self.mask << shift);
        self.len -= 1;
        v
    }

    /// Resets every counter to zero, keeping domain and capacity.
    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    /// Returns an iterator over `(element, count)` pairs in ascending element
    /// order, skipping zero counts.
    #[must_use]
    pub fn iter(&self) -> Counts<'_> {
        Counts::new(self)
    }

    /// The backing words, including any trailing zero words.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }
}

/// Minimal number of bits `w` such that `2^w - 1 >= capacity`.
#[inline(always)]
const fn field_width(capacity: usize) -> usize {
    (usize::BITS - capacity.leading_zeros()) as usize
}
