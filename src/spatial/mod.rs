//! Spatial data structures and queries.
//!
//! - [`StaticIntervalTree`] - a bulk-built interval tree for read-only stabbing queries
//! - [`IntervalTree`] - the same structure with insertion and removal

mod interval;

pub use interval::{Interval, IntervalTree, Stab, StaticIntervalTree};
