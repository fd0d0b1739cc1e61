//! quadratum - Minimum rectangle decomposition of rectilinear polygons
//!
//! Splits an orthogonal polygon, holes included, into the fewest
//! non-overlapping axis-aligned rectangles that cover it exactly. Useful for
//! collision geometry, floor plans, VLSI layouts and texture packing.
//!
//! # Example
//!
//! ```
//! use quadratum::{decompose_nested, Aabb2, Point2};
//!
//! // A plus sign: three rectangles.
//! let plus = [
//!     [1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [3.0, 1.0],
//!     [3.0, 2.0], [2.0, 2.0], [2.0, 3.0], [1.0, 3.0],
//!     [1.0, 2.0], [0.0, 2.0], [0.0, 1.0], [1.0, 1.0],
//! ];
//! let rects: Vec<Aabb2<f64>> = decompose_nested(&[plus], false).unwrap();
//! assert_eq!(rects.len(), 3);
//! assert_eq!(rects.iter().map(|r| r.area()).sum::<f64>(), 5.0);
//! ```

pub mod bounds;
pub mod decompose;
pub mod error;
pub mod matching;
pub mod polygon;
pub mod primitives;
pub mod spatial;

pub use bounds::Aabb2;
pub use decompose::{decompose_nested, decompose_region, Decomposer, DecompositionStats};
pub use error::{DecomposeError, InputIssue};
pub use polygon::Polygon;
pub use primitives::{Axis, Point2};
