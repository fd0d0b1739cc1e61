//! Polygon loops, area and containment helpers, and rectilinear validation.
//!
//! # Example
//!
//! ```
//! use quadratum::polygon::{rectilinear_area, Polygon};
//! use quadratum::Point2;
//!
//! // 4x4 square with a 1x1 hole wound the other way
//! let outer = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//! let hole = Polygon::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 1.0),
//! ]);
//!
//! assert_eq!(rectilinear_area(&[outer, hole], false), 15.0);
//! ```

mod core;
mod validate;

pub use self::core::{
    loops_contain, polygon_contains, polygon_signed_area, rectilinear_area,
    rectilinear_signed_area, Polygon,
};
pub use validate::{is_rectilinear, validate_rectilinear};
