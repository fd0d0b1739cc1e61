//! Floating-point geometric primitives.

mod point2;

pub use point2::{Axis, Point2};
