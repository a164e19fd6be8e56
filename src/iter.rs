//! Iterator implementations for `PresenceSet` and `CountingSet`.

use core::iter::{FromIterator, FusedIterator};

use crate::{
    CountingSet, Domain, PresenceSet,
    storage::{WORD_BITS, Word},
};

/// An iterator over the elements of a [`PresenceSet`] in ascending order.
///
/// This struct is created by the [`iter`](PresenceSet::iter) method. It skips
/// zero words and walks set bits with `trailing_zeros`, so its cost is
/// proportional to the number of stored words plus the number of elements.
///
/// # Examples
///
/// ```
/// use packset::PresenceSet;
/// let set: PresenceSet = [15, 5, 10].into_iter().collect();
///
/// let elements: Vec<_> = set.iter().collect();
/// assert_eq!(elements, vec![5, 10, 15]);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    words: &'a [Word],
    domain: Domain,
    wi: usize,
    cur: Word,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word], domain: Domain) -> Self {
        Self {
            words,
            domain,
            wi: 0,
            cur: words.first().copied().unwrap_or(0),
            remaining: words.iter().map(|w| w.count_ones() as usize).sum(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cur == 0 {
            self.wi += 1;
            self.cur = *self.words.get(self.wi)?;
        }

        let bi = self.cur.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.cur &= self.cur - 1;
        self.remaining -= 1;
        Some(self.domain.element(self.wi * WORD_BITS + bi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An iterator over the `(element, count)` pairs of a [`CountingSet`].
///
/// Only elements with a non-zero count are yielded, in ascending order.
///
/// # Examples
///
/// ```
/// use packset::CountingSet;
/// let mut set = CountingSet::new(3)?;
/// set.insert(4);
/// set.insert(1);
/// set.insert(4);
///
/// let counts: Vec<_> = set.iter().collect();
/// assert_eq!(counts, vec![(1, 1), (4, 2)]);
/// # Ok::<(), packset::Error>(())
/// ```
#[derive(Clone)]
pub struct Counts<'a> {
    words: &'a [Word],
    domain: Domain,
    width: usize,
    slots: usize,
    mask: Word,
    wi: usize,
    si: usize,
}

impl<'a> Counts<'a> {
    pub(crate) fn new(set: &'a CountingSet) -> Self {
        Self {
            words: set.as_words(),
            domain: set.domain(),
            width: set.width(),
            slots: set.slots_per_word(),
            mask: set.mask,
            wi: 0,
            si: 0,
        }
    }
}

impl Iterator for Counts<'_> {
    type Item = (i64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = *self.words.get(self.wi)?;
            if word == 0 || self.si >= self.slots {
                self.wi += 1;
                self.si = 0;
                continue;
            }

            let si = self.si;
            self.si += 1;
            let count = (word >> (si * self.width)) & self.mask;
            if count != 0 {
                let offset = self.wi * self.slots + si;
                return Some((self.domain.element(offset), count));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem_slots = self
            .words
            .len()
            .saturating_sub(self.wi)
            .saturating_mul(self.slots)
            .saturating_sub(self.si);
        (0, Some(rem_slots))
    }
}

impl FusedIterator for Counts<'_> {}

impl<'a> IntoIterator for &'a PresenceSet {
    type IntoIter = Iter<'a>;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a CountingSet {
    type IntoIter = Counts<'a>;
    type Item = (i64, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i64> for PresenceSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for PresenceSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl Extend<i64> for CountingSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}
