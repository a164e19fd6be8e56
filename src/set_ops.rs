//! Implementations of set operations for `PresenceSet`.
//!
//! Every operation requires both operands to share the same [`Domain`]:
//! the same bit offset must mean the same element on both sides. Mismatched
//! domains fail with [`Error::DomainMismatch`] and leave the target
//! untouched.
//!
//! [`Domain`]: crate::Domain

use crate::{Error, PresenceSet};

impl PresenceSet {
    /// Adds every element of `other` to `self`.
    ///
    /// Storage is extended to cover `other`'s words. Time complexity: O(n)
    /// where n is the max number of words in either set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut a: PresenceSet = [0, 1, 2, 3, 4].into_iter().collect();
    /// let b: PresenceSet = [3, 4, 5, 6, 10_000].into_iter().collect();
    ///
    /// a.union_with(&b)?;
    /// assert_eq!(a.to_string(), "{0 1 2 3 4 5 6 10000}");
    /// assert_eq!(a.len(), 8);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn union_with(&mut self, other: &Self) -> Result<(), Error> {
        self.domain.check_same(&other.domain)?;

        let mut iter = other.words.iter();
        for (dst, src) in self.words.iter_mut().zip(&mut iter) {
            *dst |= *src;
        }
        self.words.extend_from_slice(iter.as_slice());

        self.recount();
        Ok(())
    }

    /// Keeps only the elements of `self` that are also in `other`.
    ///
    /// Storage is truncated to the shorter operand. Time complexity: O(n)
    /// where n is the min number of words in either set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut a: PresenceSet = [0, 1, 2, 3, 4].into_iter().collect();
    /// let b: PresenceSet = [3, 4, 5, 6, 10_000].into_iter().collect();
    ///
    /// a.intersection_with(&b)?;
    /// assert_eq!(a.to_string(), "{3 4}");
    /// assert_eq!(a.len(), 2);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn intersection_with(&mut self, other: &Self) -> Result<(), Error> {
        self.domain.check_same(&other.domain)?;

        let len = self.words.len().min(other.words.len());
        for (dst, &src) in self.words.iter_mut().zip(other.words.iter()) {
            *dst &= src;
        }
        self.words.truncate(len);

        self.recount();
        Ok(())
    }

    /// Removes every element of `other` from `self`.
    ///
    /// Words of `self` beyond `other`'s length are left as they are. Time
    /// complexity: O(n) where n is the min number of words in either set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut a: PresenceSet = [0, 1, 2, 3, 4].into_iter().collect();
    /// let b: PresenceSet = [3, 4, 5, 6, 10_000].into_iter().collect();
    ///
    /// a.difference_with(&b)?;
    /// assert_eq!(a.to_string(), "{0 1 2}");
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn difference_with(&mut self, other: &Self) -> Result<(), Error> {
        self.domain.check_same(&other.domain)?;

        for (dst, &src) in self.words.iter_mut().zip(other.words.iter()) {
            *dst &= !src;
        }

        self.recount();
        Ok(())
    }

    /// Keeps the elements that are in exactly one of `self` and `other`.
    ///
    /// Storage is extended to cover `other`'s words. Time complexity: O(n)
    /// where n is the max number of words in either set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let mut a: PresenceSet = [0, 1, 2, 3, 4].into_iter().collect();
    /// let b: PresenceSet = [3, 4, 5, 6, 10_000].into_iter().collect();
    ///
    /// a.symmetric_difference_with(&b)?;
    /// assert_eq!(a.to_string(), "{0 1 2 5 6 10000}");
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn symmetric_difference_with(&mut self, other: &Self) -> Result<(), Error> {
        self.domain.check_same(&other.domain)?;

        let mut iter = other.words.iter();
        for (dst, src) in self.words.iter_mut().zip(&mut iter) {
            *dst ^= *src;
        }
        self.words.extend_from_slice(iter.as_slice());

        self.recount();
        Ok(())
    }

    /// Creates a new set that is the union of this set and another set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.clone();
        result.union_with(other)?;
        Ok(result)
    }

    /// Creates a new set that is the intersection of this set and another
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn intersection(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.clone();
        result.intersection_with(other)?;
        Ok(result)
    }

    /// Creates a new set holding the elements of this set that are not in
    /// the other set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn difference(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.clone();
        result.difference_with(other)?;
        Ok(result)
    }

    /// Creates a new set that is the symmetric difference of this set and
    /// another set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.clone();
        result.symmetric_difference_with(other)?;
        Ok(result)
    }

    /// Checks if every element of this set is also in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use packset::PresenceSet;
    /// let small: PresenceSet = [1, 2].into_iter().collect();
    /// let big: PresenceSet = [1, 2, 500].into_iter().collect();
    ///
    /// assert!(small.is_subset(&big)?);
    /// assert!(!big.is_subset(&small)?);
    /// assert!(big.is_superset(&small)?);
    /// # Ok::<(), packset::Error>(())
    /// ```
    pub fn is_subset(&self, other: &Self) -> Result<bool, Error> {
        self.domain.check_same(&other.domain)?;
        if self.len > other.len {
            return Ok(false);
        }

        // A word set here but unset in other, or past other's storage, fails
        let subset = self
            .words
            .iter()
            .enumerate()
            .all(|(i, &word)| word & !other.words.get(i) == 0);
        Ok(subset)
    }

    /// Checks if this set contains every element of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn is_superset(&self, other: &Self) -> Result<bool, Error> {
        other.is_subset(self)
    }

    /// Checks if this set shares no element with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainMismatch`] if the domains differ.
    pub fn is_disjoint(&self, other: &Self) -> Result<bool, Error> {
        self.domain.check_same(&other.domain)?;
        let disjoint = self
            .words
            .iter()
            .zip(other.words.iter())
            .all(|(&a, &b)| a & b == 0);
        Ok(disjoint)
    }
}
