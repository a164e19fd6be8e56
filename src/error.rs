//! Errors returned by set construction and set algebra.

use crate::Domain;

/// Errors that can occur when configuring or combining sets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A window must contain at least one element.
    #[error("empty window: start ({start}) >= end ({end})")]
    EmptyWindow {
        /// Inclusive lower bound that was requested
        start: i64,
        /// Exclusive upper bound that was requested
        end: i64,
    },

    /// Counting sets need room for at least one occurrence per element.
    #[error("counter capacity must be positive")]
    ZeroCapacity,

    /// The counter field for this capacity would not fit in a word.
    #[error("counter capacity ({capacity}) exceeds maximum ({max})")]
    CapacityTooLarge {
        /// Capacity that was requested
        capacity: usize,
        /// Largest accepted capacity
        max: usize,
    },

    /// Set algebra requires both operands to share the same domain.
    #[error("domain mismatch: {left} vs {right}")]
    DomainMismatch {
        /// Domain of the set being modified
        left: Domain,
        /// Domain of the other operand
        right: Domain,
    },
}
