//! Ordering strategies: sort direction, key extraction, and comparator results.
//!
//! A sequence is sorted by a key derived from each element. The key comes
//! from a [`SortKey`] strategy: [`Natural`] uses the element's own `Ord`
//! impl, [`ByKey`] applies a user-supplied function. [`Direction`] says
//! whether keys ascend or descend along the sequence.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Whether keys ascend or descend along a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Interpret a raw sign: -1 is descending, anything else is ascending.
    pub fn from_sign(sign: i32) -> Direction {
        return match sign {
            -1 => Direction::Descending,
            _ => Direction::Ascending,
        };
    }

    /// +1 for ascending, -1 for descending.
    #[inline]
    pub fn sign(self) -> i32 {
        return match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        };
    }

    /// Map a key ordering onto sequence order.
    ///
    /// `Less` means the left operand belongs earlier in the sequence.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        return match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        };
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        };
    }
}

/// A strategy comparing two elements by their sort key.
///
/// Implementations must be pure: the same pair always compares the same way.
pub trait SortKey<T> {
    /// Compare the keys of `a` and `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The strategy to use when none was configured, if the element type
    /// has one.
    fn natural() -> Option<Self>
    where
        Self: Sized,
    {
        return None;
    }
}

/// Orders elements by their own `Ord` impl; the element is its own key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> SortKey<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return a.cmp(b);
    }

    fn natural() -> Option<Natural> {
        return Some(Natural);
    }
}

/// Orders elements by the key `K` a function extracts from them.
pub struct ByKey<F, K> {
    extract: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(extract: F) -> ByKey<F, K> {
        return ByKey {
            extract,
            _key: PhantomData,
        };
    }

    /// Extract the key of an element.
    #[inline]
    pub fn key<T>(&self, item: &T) -> K
    where
        F: Fn(&T) -> K,
    {
        return (self.extract)(item);
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        return ByKey::new(self.extract.clone());
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("ByKey(..)");
    }
}

impl<T, K, F> SortKey<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return self.key(a).cmp(&self.key(b));
    }
}

/// The result of a comparator: a tri-state ordering.
///
/// `Ordering` is always well formed. Integer results follow the -1/0/1
/// convention and anything else is rejected with the raw value.
pub trait Comparison {
    fn into_ordering(self) -> Result<Ordering, i64>;
}

impl Comparison for Ordering {
    #[inline]
    fn into_ordering(self) -> Result<Ordering, i64> {
        return Ok(self);
    }
}

macro_rules! impl_comparison_for_int {
    ($($ty:ty),*) => {
        $(
            impl Comparison for $ty {
                #[inline]
                fn into_ordering(self) -> Result<Ordering, i64> {
                    return match self {
                        -1 => Ok(Ordering::Less),
                        0 => Ok(Ordering::Equal),
                        1 => Ok(Ordering::Greater),
                        other => Err(other as i64),
                    };
                }
            }
        )*
    };
}

impl_comparison_for_int!(i8, i16, i32, i64, isize);
