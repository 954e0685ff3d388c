use std::cmp::{max, min};
use std::fmt;

use num_traits::CheckedSub;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Values usable as interval endpoints.
///
/// Ordering always goes through [`Ord::cmp`], so wide ranges near the
/// numeric limits compare correctly.
pub trait Coordinate: Copy + Ord + fmt::Debug {}

impl<T> Coordinate for T where T: Copy + Ord + fmt::Debug {}

/// A closed interval `[start, end]`.
///
/// Both bounds belong to the interval. Two intervals that merely touch at a
/// boundary (`a.end == b.start`) are considered overlapping.
///
/// Ordering: `start` → `end`.
///
/// # Invariants
/// `start <= end` always holds; every constructor enforces it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Coordinate> Interval<T> {
    /// Create an interval, rejecting `start > end`.
    pub fn new(start: T, end: T) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::ReversedBounds {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }
        Ok(Self { start, end })
    }

    /// A single-point interval `[point, point]`.
    pub fn point(point: T) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// The inclusive lower bound.
    pub fn start(&self) -> T {
        self.start
    }

    /// The inclusive upper bound.
    pub fn end(&self) -> T {
        self.end
    }

    /// Consume the interval into its `(start, end)` pair.
    pub fn into_pair(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns `true` if `start == end`.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Touching boundaries count: `[1, 4]` overlaps `[4, 5]`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: min(self.start, other.start),
            end: max(self.end, other.end),
        }
    }

    /// The union of two overlapping intervals, or `None` if a gap separates them.
    pub fn merge_with(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| self.hull(other))
    }
}

impl<T> Interval<T>
where
    T: Coordinate + CheckedSub,
{
    /// Distance between the bounds (`end - start`).
    ///
    /// Returns `None` when the distance does not fit in `T`, as for
    /// `[i64::MIN, i64::MAX]`.
    pub fn len(&self) -> Option<T> {
        self.end.checked_sub(&self.start)
    }
}

impl<T: Coordinate> TryFrom<(T, T)> for Interval<T> {
    type Error = TypeError;

    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<T: Coordinate> TryFrom<[T; 2]> for Interval<T> {
    type Error = TypeError;

    fn try_from([start, end]: [T; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{:?}, {:?}]", self.start, self.end)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// Encoded as a two-element array so `[[1, 3], [2, 6]]` reads naturally.
impl<T: Serialize> Serialize for Interval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.start, &self.end).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Coordinate + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end) = <(T, T)>::deserialize(deserializer)?;
        Self::new(start, end).map_err(serde::de::Error::custom)
    }
}
