use num_traits::{CheckedAdd, CheckedSub, Zero};
use serde::{Deserialize, Serialize};

use crate::interval::{Coordinate, Interval};

/// An ordered sequence of intervals.
///
/// Used for both merge input (any order, overlaps allowed) and merge output
/// (sorted, pairwise separated by a gap). [`IntervalSet::is_normalized`]
/// tells the two apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Coordinate + Deserialize<'de>"
))]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Coordinate> IntervalSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Create an empty set with room for `capacity` intervals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Append an interval at the end of the sequence.
    pub fn push(&mut self, interval: Interval<T>) {
        self.intervals.push(interval);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.intervals
    }

    pub fn first(&self) -> Option<&Interval<T>> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval<T>> {
        self.intervals.last()
    }

    /// Returns `true` if starts are non-decreasing.
    pub fn is_sorted_by_start(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|pair| pair[0].start() <= pair[1].start())
    }

    /// Returns `true` if the set is sorted by start and every adjacent pair
    /// is separated by a gap (`a.end < b.start`).
    ///
    /// This is exactly the shape a merge produces, and merging a normalized
    /// set returns it unchanged.
    pub fn is_normalized(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|pair| pair[0].end() < pair[1].start())
    }

    /// Returns `true` if any member contains `value`.
    pub fn contains_point(&self, value: T) -> bool {
        self.intervals.iter().any(|iv| iv.contains_point(value))
    }
}

impl<T> IntervalSet<T>
where
    T: Coordinate + CheckedSub + CheckedAdd + Zero,
{
    /// Sum of member lengths, or `None` if any length or the running sum
    /// does not fit in `T`.
    ///
    /// Overlapping members are counted once per member, so this equals the
    /// measure of the covered region only on a normalized set.
    pub fn total_len(&self) -> Option<T> {
        self.intervals
            .iter()
            .try_fold(T::zero(), |acc, iv| acc.checked_add(&iv.len()?))
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<T> From<Vec<Interval<T>>> for IntervalSet<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
