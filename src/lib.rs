//! Sorted sequences with binary search and order-preserving insertion.
//!
//! A [`SortedSequence`] owns a vector that is sorted by some key, either
//! ascending or descending, and keeps it that way as values are inserted.
//!
//! # Quick Start
//!
//! ```
//! use sorted_sequence::{Direction, SortedSequence};
//!
//! // Direction is detected from the first two elements.
//! let mut seq = SortedSequence::from_sorted(vec![121, 80, 20, 13, 10, 5]);
//! assert_eq!(seq.direction(), Direction::Descending);
//!
//! let found = seq.find(&80).unwrap();
//! assert_eq!((found.index, *found.value), (1, 80));
//!
//! let inserted = seq.insert(15).unwrap();
//! assert_eq!(inserted.index, 3);
//! assert_eq!(seq.as_slice(), &[121, 80, 20, 15, 13, 10, 5]);
//! ```
//!
//! # Custom keys
//!
//! Elements without a natural order are sorted by a key function:
//!
//! ```
//! use sorted_sequence::SortedSequence;
//!
//! struct Span {
//!     start: u64,
//! }
//!
//! let spans = vec![Span { start: 0 }, Span { start: 10 }, Span { start: 20 }];
//! let mut seq = SortedSequence::with_key(spans, |span: &Span| span.start);
//!
//! assert_eq!(seq.find(&Span { start: 10 }).map(|e| e.index), Some(1));
//! assert_eq!(seq.find_key(&20).map(|e| e.index), Some(2));
//! assert_eq!(seq.insert(Span { start: 5 }).unwrap().index, 1);
//! ```

pub mod error;
pub mod options;
pub mod order;
pub mod search;
mod sequence;

pub use error::{AlgorithmFault, Error, Result};
pub use options::SortOptions;
pub use order::{ByKey, Comparison, Direction, Natural, SortKey};
pub use search::midpoint;
pub use sequence::{Entry, SortedSequence};
