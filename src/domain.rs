//! Element domains and the rebasing between elements and bit offsets.

use core::fmt;

use crate::Error;

/// The range of integers a set can hold.
///
/// Elements outside the domain are silently ignored by every element
/// operation: inserts and removes are no-ops, lookups report absence.
///
/// # Examples
///
/// ```
/// use packset::Domain;
///
/// let unbounded = Domain::Unbounded;
/// assert!(unbounded.contains(0));
/// assert!(!unbounded.contains(-1));
///
/// let window = Domain::window(-1, 3)?;
/// assert!(window.contains(-1));
/// assert!(!window.contains(3));
/// assert_eq!(window.origin(), -1);
///
/// assert!(Domain::window(5, 5).is_err());
/// # Ok::<(), packset::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Every non-negative integer, starting at zero.
    #[default]
    Unbounded,
    /// The half-open range `[start, end)`.
    Window {
        /// Inclusive lower bound
        start: i64,
        /// Exclusive upper bound
        end: i64,
    },
}

impl Domain {
    /// Creates a windowed domain covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWindow`] if `start >= end`.
    pub fn window(start: i64, end: i64) -> Result<Self, Error> {
        if start >= end {
            tracing::debug!(start, end, "rejected empty window");
            return Err(Error::EmptyWindow { start, end });
        }
        Ok(Self::Window { start, end })
    }

    /// The element stored at bit offset zero.
    #[must_use]
    #[inline(always)]
    pub const fn origin(&self) -> i64 {
        match *self {
            Self::Unbounded => 0,
            Self::Window { start, .. } => start,
        }
    }

    /// Returns `true` if `x` lies inside the domain.
    #[must_use]
    #[inline(always)]
    pub const fn contains(&self, x: i64) -> bool {
        match *self {
            Self::Unbounded => x >= 0,
            Self::Window { start, end } => start <= x && x < end,
        }
    }

    /// Rebases `x` to its offset from the origin, or `None` if `x` is outside
    /// the domain or too far from the origin to address on this target.
    #[must_use]
    #[inline(always)]
    pub fn offset(&self, x: i64) -> Option<usize> {
        if !self.contains(x) {
            return None;
        }
        usize::try_from(x.abs_diff(self.origin())).ok()
    }

    /// Maps an offset produced by [`offset`](Self::offset) back to its
    /// element.
    #[inline(always)]
    pub(crate) const fn element(&self, offset: usize) -> i64 {
        self.origin().wrapping_add_unsigned(offset as u64)
    }

    /// Fails unless `other` is the same domain.
    pub(crate) fn check_same(&self, other: &Self) -> Result<(), Error> {
        if self != other {
            tracing::debug!(left = %self, right = %other, "refusing set algebra across domains");
            return Err(Error::DomainMismatch {
                left: *self,
                right: *other,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("[0, ∞)"),
            Self::Window { start, end } => write!(f, "[{start}, {end})"),
        }
    }
}
