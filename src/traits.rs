//! Trait implementations for `PresenceSet` and `CountingSet`.

use core::fmt;

use crate::{CountingSet, Domain, PresenceSet};

/// Operations shared by every set shape in this crate.
///
/// Both [`PresenceSet`] and [`CountingSet`] implement this trait, so code
/// that only needs membership can be written once for either.
///
/// # Examples
///
/// ```
/// use packset::{CountingSet, IntSet, PresenceSet};
///
/// fn dedup(set: &mut impl IntSet, input: &[i64]) -> usize {
///     input.iter().filter(|&&x| !set.contains(x) && set.insert(x)).count()
/// }
///
/// let mut presence = PresenceSet::new();
/// assert_eq!(dedup(&mut presence, &[1, 2, 2, 3]), 3);
///
/// let mut counting = CountingSet::new(3)?;
/// assert_eq!(dedup(&mut counting, &[1, 2, 2, 3]), 3);
/// # Ok::<(), packset::Error>(())
/// ```
pub trait IntSet {
    /// Adds one occurrence of `x`; returns `true` if the set changed.
    fn insert(&mut self, x: i64) -> bool;

    /// Returns `true` if `x` is present.
    fn contains(&self, x: i64) -> bool;

    /// Removes one occurrence of `x`; returns `true` if the set changed.
    fn remove(&mut self, x: i64) -> bool;

    /// Number of distinct elements present.
    fn len(&self) -> usize;

    /// Returns `true` if no element is present.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, keeping the configuration.
    fn clear(&mut self);

    /// The domain elements are drawn from.
    fn domain(&self) -> Domain;
}

impl IntSet for PresenceSet {
    fn insert(&mut self, x: i64) -> bool {
        Self::insert(self, x)
    }

    fn contains(&self, x: i64) -> bool {
        Self::contains(self, x)
    }

    fn remove(&mut self, x: i64) -> bool {
        Self::remove(self, x)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn domain(&self) -> Domain {
        Self::domain(self)
    }
}

impl IntSet for CountingSet {
    fn insert(&mut self, x: i64) -> bool {
        Self::insert(self, x)
    }

    fn contains(&self, x: i64) -> bool {
        Self::contains(self, x)
    }

    fn remove(&mut self, x: i64) -> bool {
        Self::remove(self, x)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn domain(&self) -> Domain {
        Self::domain(self)
    }
}

impl Default for PresenceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `{a b c}` with elements in ascending order.
fn write_elements(f: &mut fmt::Formatter<'_>, elements: impl Iterator<Item = i64>) -> fmt::Result {
    f.write_str("{")?;
    for (i, x) in elements.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{x}")?;
    }
    f.write_str("}")
}

impl fmt::Display for PresenceSet {
    /// Formats the set as its ascending, space-separated elements in braces.
    ///
    /// # Examples
    ///
    /// ```
    /// use packset::PresenceSet;
    ///
    /// let set: PresenceSet = [10_000, 2, 0, 1].into_iter().collect();
    /// assert_eq!(set.to_string(), "{0 1 2 10000}");
    /// assert_eq!(PresenceSet::new().to_string(), "{}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

impl fmt::Display for CountingSet {
    /// Formats the elements with a non-zero count like [`PresenceSet`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use packset::CountingSet;
    ///
    /// let mut set = CountingSet::new(3)?;
    /// set.extend([4, 2, 2, 0, 1]);
    /// assert_eq!(set.to_string(), "{0 1 2 4}");
    /// # Ok::<(), packset::Error>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter().map(|(x, _)| x))
    }
}

impl fmt::Debug for PresenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Debug for CountingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for PresenceSet {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.len == other.len
            && self.words.as_slice_rtrim() == other.words.as_slice_rtrim()
    }
}

impl Eq for PresenceSet {}

impl PartialEq for CountingSet {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.capacity == other.capacity
            && self.len == other.len
            && self.words.as_slice_rtrim() == other.words.as_slice_rtrim()
    }
}

impl Eq for CountingSet {}
