//! Error types for the merge crate.

/// Reasons an input sequence is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The input sequence contained no intervals.
    #[error("interval sequence is empty")]
    Empty,

    /// The pair at `index` has `start > end`.
    #[error("interval {index} is reversed: start {start} is greater than end {end}")]
    ReversedInterval {
        index: usize,
        start: String,
        end: String,
    },

    /// The input is longer than [`MergeConfig::max_intervals`](crate::MergeConfig::max_intervals).
    #[error("too many intervals: limit {limit}, got {actual}")]
    TooManyIntervals { limit: usize, actual: usize },
}

/// Errors that can occur during merge operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The input violated a merge precondition. Nothing was produced.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl MergeError {
    /// Returns `true` for precondition failures on the input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
