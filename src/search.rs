//! Binary search helpers shared by `find` and `insert`.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::order::{Comparison, Direction};

/// Floor of the average of `min` and `max`.
///
/// Requires `min <= max`. Never overflows, even near `usize::MAX`.
#[inline]
pub fn midpoint(min: usize, max: usize) -> usize {
    debug_assert!(min <= max);
    return min + (max - min) / 2;
}

/// Where the search goes next after comparing against the element at `index`.
///
/// `Greater` means the target lies to the left (lower indices), `Less` to
/// the right, `Equal` is a match. Direction is already folded in, so a
/// descending sequence reuses the ascending search loop unchanged.
pub(crate) fn decide<C: Comparison>(
    direction: Direction,
    index: usize,
    comparison: C,
) -> Result<Ordering> {
    return match comparison.into_ordering() {
        Ok(ordering) => Ok(direction.apply(ordering)),
        Err(returned) => {
            log::warn!("comparator returned {returned} at index {index}, aborting search");
            Err(Error::Comparator { index, returned })
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_floors() {
        assert_eq!(midpoint(0, 0), 0);
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(0, 13), 6);
        assert_eq!(midpoint(3, 4), 3);
        assert_eq!(midpoint(7, 7), 7);
    }

    #[test]
    fn midpoint_near_usize_max() {
        assert_eq!(midpoint(usize::MAX - 1, usize::MAX), usize::MAX - 1);
        assert_eq!(midpoint(usize::MAX / 2, usize::MAX), usize::MAX / 2 + usize::MAX / 4 + 1);
        assert_eq!(midpoint(0, usize::MAX), usize::MAX / 2);
    }

    #[test]
    fn decide_folds_direction() {
        assert_eq!(decide(Direction::Ascending, 0, Ordering::Greater), Ok(Ordering::Greater));
        assert_eq!(decide(Direction::Descending, 0, Ordering::Greater), Ok(Ordering::Less));
        assert_eq!(decide(Direction::Descending, 0, 0i32), Ok(Ordering::Equal));
    }

    #[test]
    fn decide_rejects_malformed() {
        assert_eq!(
            decide(Direction::Ascending, 5, 3i32),
            Err(Error::Comparator { index: 5, returned: 3 }),
        );
    }
}
