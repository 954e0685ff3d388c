use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("reversed interval bounds: start {start} is greater than end {end}")]
    ReversedBounds { start: String, end: String },
}
