//! Merge engine for coalesce.
//!
//! Collapses a collection of closed intervals into the minimal sequence of
//! disjoint intervals covering the same points, sorted by start. Intervals
//! that touch at a boundary are merged.
//!
//! # Key Types
//!
//! - [`IntervalMerger`] -- Sort-then-scan merge engine
//! - [`MergeConfig`] -- Input limits applied before merging
//! - [`MergeError`] / [`InvalidInput`] -- Rejected input

pub mod config;
pub mod error;
pub mod merger;

pub use config::MergeConfig;
pub use error::{InvalidInput, MergeError, MergeResult};
pub use merger::{merge, merge_pairs, IntervalMerger};
