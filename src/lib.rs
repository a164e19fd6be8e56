//! Packed-word integer sets with optional domain windows.
//!
//! This crate provides two set shapes built on the same growable word
//! storage:
//!
//! - [`PresenceSet`]: one bit per element, with union, intersection,
//!   difference and symmetric difference.
//! - [`CountingSet`]: one saturating counter per element, packed as many to a
//!   word as its capacity allows.
//!
//! Both can be restricted to a [`Domain`] window `[start, end)`, which
//! rebases storage to `start` and silently ignores everything outside.
//!
//! # Features
//!
//! - **No per-element allocation**: storage is a single vector of words that
//!   grows only to the highest element touched
//! - **Exact cardinality** in O(1), maintained through every mutation and
//!   set operation
//! - **Saturating counters** sized by integer bit length of the capacity
//! - **Explicit errors** for invalid configuration and for set algebra
//!   across different domains
//! - **`no_std` support** with `alloc` (disable the default `std` feature)
//!
//! # Examples
//!
//! ```
//! use packset::{CountingSet, PresenceSet};
//!
//! let mut b = PresenceSet::new();
//! b.extend([0, 1, 2, 3, 4]);
//! let c: PresenceSet = [3, 4, 5, 6, 10_000].into_iter().collect();
//!
//! assert_eq!(b.union(&c)?.to_string(), "{0 1 2 3 4 5 6 10000}");
//! assert_eq!(b.intersection(&c)?.to_string(), "{3 4}");
//! assert_eq!(b.difference(&c)?.to_string(), "{0 1 2}");
//! assert_eq!(b.symmetric_difference(&c)?.to_string(), "{0 1 2 5 6 10000}");
//!
//! let mut seen = CountingSet::with_window(-100, 100, 3)?;
//! for x in [5, 5, 5, 5, -7, 500] {
//!     seen.insert(x);
//! }
//! assert_eq!(seen.count(5), 3); // Saturated
//! assert_eq!(seen.count(500), 0); // Outside the window
//! assert_eq!(seen.len(), 2);
//! # Ok::<(), packset::Error>(())
//! ```
//!
//! # Performance
//!
//! - `insert`, `remove`, `contains` and `count` are O(1) amortized
//! - `len` is O(1)
//! - Cloning and set operations are O(n) where n is the number of stored
//!   words, never the size of the domain

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod counting;
mod domain;
mod error;
mod iter;
mod presence;
mod set_ops;
pub mod storage;
pub mod traits;

// Re-exports
pub use counting::CountingSet;
pub use domain::Domain;
pub use error::Error;
pub use iter::{Counts, Iter};
pub use presence::PresenceSet;
pub use traits::IntSet;
