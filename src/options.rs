//! Construction options for a sorted sequence.

use crate::order::{ByKey, Direction, Natural};

/// Configuration record passed to
/// [`SortedSequence::with_options`](crate::SortedSequence::with_options).
///
/// Both fields are optional. A missing key strategy falls back to the
/// element type's natural order where it has one. A missing direction is
/// detected from the first two elements.
#[derive(Clone, Debug)]
pub struct SortOptions<O> {
    pub key: Option<O>,
    pub direction: Option<Direction>,
}

impl<O> Default for SortOptions<O> {
    fn default() -> Self {
        return SortOptions {
            key: None,
            direction: None,
        };
    }
}

impl SortOptions<Natural> {
    /// Options for elements ordered by their own `Ord` impl.
    pub fn new() -> SortOptions<Natural> {
        return SortOptions::default();
    }

    /// Like [`SortOptions::new`], with the strategy set explicitly.
    pub fn natural() -> SortOptions<Natural> {
        return SortOptions {
            key: Some(Natural),
            direction: None,
        };
    }
}

impl<F, K> SortOptions<ByKey<F, K>> {
    /// Options for elements ordered by the key `extract` returns.
    pub fn by_key<T>(extract: F) -> SortOptions<ByKey<F, K>>
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        return SortOptions {
            key: Some(ByKey::new(extract)),
            direction: None,
        };
    }
}

impl<O> SortOptions<O> {
    /// Set the key strategy.
    pub fn key(mut self, key: O) -> Self {
        self.key = Some(key);
        return self;
    }

    /// Fix the direction instead of detecting it.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        return self;
    }

    /// Fix the direction from a raw sign, where -1 is descending.
    /// Anything other than -1 is treated as ascending.
    pub fn direction_sign(self, sign: i32) -> Self {
        return self.direction(Direction::from_sign(sign));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let options = SortOptions::new();
        assert!(options.key.is_none());
        assert!(options.direction.is_none());
    }

    #[test]
    fn natural_sets_key() {
        let options = SortOptions::natural().direction(Direction::Descending);
        assert_eq!(options.key, Some(Natural));
        assert_eq!(options.direction, Some(Direction::Descending));
    }

    #[test]
    fn by_key_sets_key() {
        let options = SortOptions::by_key(|pair: &(i32, i32)| pair.1);
        let key = options.key.expect("key strategy");
        assert_eq!(key.key(&(1, 9)), 9);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(SortOptions::new().direction_sign(-1).direction, Some(Direction::Descending));
        assert_eq!(SortOptions::new().direction_sign(1).direction, Some(Direction::Ascending));
        assert_eq!(SortOptions::new().direction_sign(0).direction, Some(Direction::Ascending));
    }
}
