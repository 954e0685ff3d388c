//! Sort-then-scan interval merging.
//!
//! Input is sorted by start with a stable three-way comparison, then scanned
//! once while a single running interval absorbs every overlapping successor.
//! The running interval is emitted only when it closes: at the first
//! successor separated from it by a gap, or at the end of the input. Each
//! disjoint run therefore yields exactly one output interval.

use coalesce_types::{Coordinate, Interval, IntervalSet};
use tracing::{debug, warn};

use crate::config::MergeConfig;
use crate::error::{InvalidInput, MergeResult};

/// Merges overlapping closed intervals into a minimal disjoint cover.
#[derive(Clone, Debug, Default)]
pub struct IntervalMerger {
    config: MergeConfig,
}

impl IntervalMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge `intervals` into a sorted sequence of pairwise separated intervals
    /// covering exactly the same points.
    ///
    /// Input order is irrelevant. Fails with [`InvalidInput::Empty`] on an
    /// empty input and [`InvalidInput::TooManyIntervals`] when the configured
    /// limit is exceeded.
    pub fn merge<T, I>(&self, intervals: I) -> MergeResult<IntervalSet<T>>
    where
        T: Coordinate,
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut sorted: Vec<Interval<T>> = intervals.into_iter().collect();
        self.check_len(sorted.len())?;

        sorted.sort_by(|a, b| a.start().cmp(&b.start()));
        let input = sorted.len();
        let merged = coalesce_sorted(sorted);

        debug!(input, output = merged.len(), "intervals merged");
        Ok(merged)
    }

    /// Validate raw `(start, end)` pairs, then [`merge`](Self::merge) them.
    ///
    /// The first pair with `start > end` is reported with its input position.
    pub fn merge_pairs<T, I>(&self, pairs: I) -> MergeResult<IntervalSet<T>>
    where
        T: Coordinate,
        I: IntoIterator<Item = (T, T)>,
    {
        let intervals = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                Interval::new(start, end).map_err(|_| {
                    warn!(index, ?start, ?end, "rejected reversed interval");
                    InvalidInput::ReversedInterval {
                        index,
                        start: format!("{start:?}"),
                        end: format!("{end:?}"),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.merge(intervals)
    }

    fn check_len(&self, len: usize) -> Result<(), InvalidInput> {
        if len == 0 {
            warn!("rejected empty interval sequence");
            return Err(InvalidInput::Empty);
        }
        if let Some(limit) = self.config.max_intervals {
            if len > limit {
                warn!(limit, actual = len, "interval limit exceeded");
                return Err(InvalidInput::TooManyIntervals { limit, actual: len });
            }
        }
        Ok(())
    }
}

/// Merge `intervals` with the default configuration.
pub fn merge<T, I>(intervals: I) -> MergeResult<IntervalSet<T>>
where
    T: Coordinate,
    I: IntoIterator<Item = Interval<T>>,
{
    IntervalMerger::default().merge(intervals)
}

/// Validate and merge raw `(start, end)` pairs with the default configuration.
pub fn merge_pairs<T, I>(pairs: I) -> MergeResult<IntervalSet<T>>
where
    T: Coordinate,
    I: IntoIterator<Item = (T, T)>,
{
    IntervalMerger::default().merge_pairs(pairs)
}

// `sorted` must be ordered by start.
fn coalesce_sorted<T: Coordinate>(sorted: Vec<Interval<T>>) -> IntervalSet<T> {
    let mut merged = IntervalSet::new();
    let mut rest = sorted.into_iter();
    let Some(mut current) = rest.next() else {
        return merged;
    };

    for next in rest {
        match current.merge_with(&next) {
            Some(extended) => current = extended,
            None => {
                merged.push(current);
                current = next;
            }
        }
    }
    merged.push(current);
    merged
}
