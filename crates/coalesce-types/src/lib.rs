//! Foundation types for coalesce.
//!
//! This crate provides the closed interval and interval sequence types used
//! by the merge engine and the command-line front end.
//!
//! # Key Types
//!
//! - [`Interval`] -- Closed range `[start, end]` with `start <= end`
//! - [`IntervalSet`] -- Ordered sequence of intervals (merge input or output)
//! - [`Coordinate`] -- Bound accepted for interval endpoints
//! - [`TypeError`] -- Construction failures

pub mod error;
pub mod interval;
pub mod set;

pub use error::TypeError;
pub use interval::{Coordinate, Interval};
pub use set::IntervalSet;
