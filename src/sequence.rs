//! A vector kept sorted by a key, with binary search and ordered insertion.
//!
//! The backing vector is assumed to be sorted when the sequence is built
//! and is only ever mutated through [`SortedSequence::insert`], which keeps
//! it sorted. Lookups are O(log n) comparisons; insertion is O(log n)
//! comparisons plus an O(n) shift.
//!
//! # Direction detection
//!
//! When no direction is configured it is guessed from the first two
//! elements: ascending if the second key is strictly greater than the
//! first, descending otherwise. Nothing past the second element is
//! inspected, so a sequence like `[1, 2, 0]` is taken to be ascending.

use std::cmp::Ordering;
use std::ops::Deref;

use crate::error::{AlgorithmFault, Error, Result};
use crate::options::SortOptions;
use crate::order::{ByKey, Comparison, Direction, Natural, SortKey};
use crate::search::{decide, midpoint};

/// A located element: its index in the sequence and a reference to it.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<'a, T> {
    pub index: usize,
    pub value: &'a T,
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for Entry<'_, T> {}

/// A vector sorted by the key `O` extracts, in a fixed [`Direction`].
#[derive(Clone, Debug)]
pub struct SortedSequence<T, O = Natural> {
    data: Vec<T>,
    order: O,
    direction: Direction,
}

impl<T: Ord> SortedSequence<T> {
    /// An empty, ascending sequence of naturally ordered elements.
    pub fn new() -> SortedSequence<T> {
        return SortedSequence {
            data: Vec::new(),
            order: Natural,
            direction: Direction::default(),
        };
    }

    /// Wrap an already sorted vector, detecting its direction.
    pub fn from_sorted(data: Vec<T>) -> SortedSequence<T> {
        return SortedSequence::assemble(data, Natural, None);
    }
}

impl<T: Ord> Default for SortedSequence<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, K, F> SortedSequence<T, ByKey<F, K>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Wrap a vector already sorted by `extract`, detecting its direction.
    pub fn with_key(data: Vec<T>, extract: F) -> SortedSequence<T, ByKey<F, K>> {
        return SortedSequence::assemble(data, ByKey::new(extract), None);
    }

    /// Find an element whose key equals `key`.
    pub fn find_key(&self, key: &K) -> Option<Entry<'_, T>> {
        let order = &self.order;
        return self.find_by(key, |candidate, key| order.key(candidate).cmp(key)).ok().flatten();
    }
}

impl<T, O: SortKey<T>> SortedSequence<T, O> {
    /// Build a sequence from a configuration record.
    ///
    /// Fails with [`Error::Configuration`] when no key strategy is given and
    /// `O` has no natural fallback.
    pub fn with_options(data: Vec<T>, options: SortOptions<O>) -> Result<SortedSequence<T, O>> {
        let order = match options.key.or_else(O::natural) {
            Some(order) => order,
            None => {
                log::warn!("no key strategy for a sequence of {} elements", data.len());
                return Err(Error::Configuration);
            }
        };
        return Ok(SortedSequence::assemble(data, order, options.direction));
    }

    fn assemble(data: Vec<T>, order: O, direction: Option<Direction>) -> SortedSequence<T, O> {
        let direction = match direction {
            Some(direction) => direction,
            None => {
                let detected = detect_direction(&data, &order);
                log::debug!("detected {detected} order over {} elements", data.len());
                detected
            }
        };
        return SortedSequence {
            data,
            order,
            direction,
        };
    }

    /// The direction keys run in.
    #[inline]
    pub fn direction(&self) -> Direction {
        return self.direction;
    }

    /// The key strategy.
    #[inline]
    pub fn order(&self) -> &O {
        return &self.order;
    }

    /// The elements, in sorted order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.data;
    }

    /// Give back the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        return self.data;
    }

    /// Find an element with the same key as `target`.
    pub fn find(&self, target: &T) -> Option<Entry<'_, T>> {
        let order = &self.order;
        return self.find_by(target, |candidate, target| order.compare(candidate, target)).ok().flatten();
    }

    /// Find an element using a custom comparator.
    ///
    /// `compare(candidate, probe)` reports how the candidate's key relates to
    /// the probe: `Less` (or -1) if the candidate's key is smaller, `Equal`
    /// (or 0) on a match, `Greater` (or 1) if larger. The probe can be any
    /// type, not just `T`.
    ///
    /// Returns `Ok(None)` when nothing matches, and [`Error::Comparator`] if
    /// the comparator returns an integer outside -1..=1.
    pub fn find_by<P, C, Cmp>(&self, probe: &P, mut compare: Cmp) -> Result<Option<Entry<'_, T>>>
    where
        P: ?Sized,
        C: Comparison,
        Cmp: FnMut(&T, &P) -> C,
    {
        if self.data.is_empty() {
            return Ok(None);
        }

        let mut min = 0;
        let mut max = self.data.len() - 1;
        while min <= max {
            let mid = midpoint(min, max);
            let value = &self.data[mid];
            match decide(self.direction, mid, compare(value, probe))? {
                Ordering::Equal => return Ok(Some(Entry { index: mid, value })),
                Ordering::Greater => match mid.checked_sub(1) {
                    Some(below) => max = below,
                    None => break,
                },
                Ordering::Less => min = mid + 1,
            }
        }
        return Ok(None);
    }

    /// Insert `value` where it keeps the sequence sorted.
    ///
    /// Among equal keys the new value goes in front of the run when
    /// ascending and behind it when descending.
    pub fn insert(&mut self, value: T) -> Result<Entry<'_, T>> {
        let order = &self.order;
        let index = locate(&self.data, order, self.direction, &value, |candidate, value| {
            order.compare(candidate, value)
        })?;
        return Ok(self.place(index, value));
    }

    /// Insert `value` using a custom comparator for the search.
    ///
    /// The comparator follows the same convention as in
    /// [`find_by`](Self::find_by) with `value` as the probe. The fast paths
    /// and the final placement still use the key strategy, so a comparator
    /// that disagrees with it can yield [`Error::Algorithm`]. On any error
    /// the sequence is unchanged.
    pub fn insert_by<C, Cmp>(&mut self, value: T, compare: Cmp) -> Result<Entry<'_, T>>
    where
        C: Comparison,
        Cmp: FnMut(&T, &T) -> C,
    {
        let index = locate(&self.data, &self.order, self.direction, &value, compare)?;
        return Ok(self.place(index, value));
    }

    fn place(&mut self, index: usize, value: T) -> Entry<'_, T> {
        self.data.insert(index, value);
        return Entry {
            index,
            value: &self.data[index],
        };
    }
}

impl<T, O> Deref for SortedSequence<T, O> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        return &self.data;
    }
}

impl<T, O> From<SortedSequence<T, O>> for Vec<T> {
    fn from(sequence: SortedSequence<T, O>) -> Vec<T> {
        return sequence.data;
    }
}

/// Ascending if the second key is strictly greater than the first.
fn detect_direction<T, O: SortKey<T>>(data: &[T], order: &O) -> Direction {
    if data.len() < 2 {
        return Direction::Ascending;
    }
    return match order.compare(&data[1], &data[0]) {
        Ordering::Greater => Direction::Ascending,
        _ => Direction::Descending,
    };
}

/// Find the index `value` should be inserted at.
fn locate<T, O, C, Cmp>(
    data: &[T],
    order: &O,
    direction: Direction,
    value: &T,
    mut compare: Cmp,
) -> Result<usize>
where
    O: SortKey<T>,
    C: Comparison,
    Cmp: FnMut(&T, &T) -> C,
{
    // `Less` when `a` belongs before `b` in this sequence.
    let sequence_order = |a: &T, b: &T| direction.apply(order.compare(a, b));

    let (first, last) = match (data.first(), data.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            log::trace!("insert into empty sequence");
            return Ok(0);
        }
    };
    if sequence_order(value, first) == Ordering::Less {
        log::trace!("insert before first of {} elements", data.len());
        return Ok(0);
    }
    if sequence_order(value, last) == Ordering::Greater {
        log::trace!("insert after last of {} elements", data.len());
        return Ok(data.len());
    }

    // An equal key steers toward the edge of its run that the new value
    // joins: the front when ascending, the back when descending. The
    // midpoint stays a candidate when moving left, so with a consistent
    // comparator the range always closes on a single index.
    let mut min = 0;
    let mut max = data.len() - 1;
    while min < max {
        let mid = midpoint(min, max);
        match (decide(direction, mid, compare(&data[mid], value))?, direction) {
            (Ordering::Greater, _) | (Ordering::Equal, Direction::Ascending) => max = mid,
            (Ordering::Less, _) | (Ordering::Equal, Direction::Descending) => min = mid + 1,
        }
    }
    if min != max {
        let fault = AlgorithmFault::RangeNotCollapsed { min, max };
        log::warn!("{fault}");
        return Err(fault.into());
    }

    let at_or_before = order.compare(value, &data[min]) != Ordering::Greater;
    let index = match (at_or_before, direction) {
        (true, Direction::Ascending) => min,
        (true, Direction::Descending) => min + 1,
        (false, Direction::Ascending) => min + 1,
        (false, Direction::Descending) => min,
    };

    let after_previous = index == 0 || sequence_order(&data[index - 1], value) != Ordering::Greater;
    let before_next = index == data.len() || sequence_order(value, &data[index]) != Ordering::Greater;
    if !(after_previous && before_next) {
        let fault = AlgorithmFault::OrderViolated { index };
        log::warn!("{fault}");
        return Err(fault.into());
    }

    log::trace!("insert at {index} of {} elements", data.len());
    return Ok(index);
}
