//! Errors reported by sorted sequence construction, search, and insertion.
//!
//! A missing match is not an error: `find` reports it as `None`.

use thiserror::Error;

/// Result alias for sorted sequence operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`SortedSequence`](crate::SortedSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No key function was given and the element type has no natural order.
    #[error("cannot infer ordering key for composite element type without explicit key function")]
    Configuration,

    /// A comparator returned something other than -1, 0, or 1.
    #[error("comparator returned {returned} at index {index}, expected -1, 0, or 1")]
    Comparator {
        /// Index of the element being compared when the comparator misbehaved.
        index: usize,
        /// The raw value the comparator returned.
        returned: i64,
    },

    /// An internal invariant of the insertion search did not hold.
    #[error("sorted sequence algorithm error: {0}")]
    Algorithm(#[from] AlgorithmFault),
}

/// The specific invariant an insertion tripped over.
///
/// Both faults mean the comparator disagrees with the key function or with
/// the sequence's direction. The sequence is never modified when one is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgorithmFault {
    /// The search range did not narrow down to a single index.
    #[error("search range did not collapse (min {min}, max {max})")]
    RangeNotCollapsed { min: usize, max: usize },

    /// The chosen slot would put the value out of order with a neighbour.
    #[error("inserting at index {index} would break the sort order")]
    OrderViolated { index: usize },
}
