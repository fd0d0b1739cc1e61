//! Rectilinear loop validation and cleanup.
//!
//! Input loops may repeat points or place extra points along a straight run.
//! Those are collapsed here so every remaining vertex is a true corner and
//! consecutive edges alternate between horizontal and vertical. Anything that
//! cannot be cleaned that way (non-finite coordinates, slanted edges, loops
//! that collapse to fewer than four corners) is rejected.
//!
//! # Example
//!
//! ```
//! use quadratum::polygon::validate_rectilinear;
//! use quadratum::Point2;
//!
//! let square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0), // collinear, dropped
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 2.0), // duplicate, dropped
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let corners = validate_rectilinear(&square).unwrap();
//! assert_eq!(corners.len(), 4);
//! ```

use crate::error::InputIssue;
use crate::primitives::Point2;
use num_traits::Float;

/// Returns `true` if `a`, `b`, `c` lie on one horizontal or vertical line.
///
/// Coincident points count as collinear, which is what lets duplicates
/// collapse along with straight runs.
#[inline]
fn axis_collinear<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    (a.x == b.x && b.x == c.x) || (a.y == b.y && b.y == c.y)
}

/// Checks that every edge of the loop is horizontal or vertical.
///
/// Zero-length edges are accepted; they are removed by cleanup.
pub fn is_rectilinear<F: Float>(points: &[Point2<F>]) -> bool {
    let n = points.len();
    (0..n).all(|i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        a.x == b.x || a.y == b.y
    })
}

/// Validates an axis-aligned loop and returns its corners.
///
/// The returned loop keeps the input's winding and the relative order of the
/// surviving points. It has no repeated points and no three consecutive
/// collinear points, so its edges alternate axes and its length is even.
pub fn validate_rectilinear<F: Float>(points: &[Point2<F>]) -> Result<Vec<Point2<F>>, InputIssue> {
    if let Some(point_index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InputIssue::NonFinite { point_index });
    }

    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if a.x != b.x && a.y != b.y {
            return Err(InputIssue::NotAxisAligned { point_index: i });
        }
    }

    let mut corners: Vec<Point2<F>> = Vec::with_capacity(n);
    for &p in points {
        while corners.len() >= 2
            && axis_collinear(corners[corners.len() - 2], corners[corners.len() - 1], p)
        {
            corners.pop();
        }
        if corners.len() == 1 && corners[0] == p {
            continue;
        }
        corners.push(p);
    }

    // Close the seam between the last and first points.
    loop {
        let m = corners.len();
        if m < 3 {
            break;
        }
        if axis_collinear(corners[m - 2], corners[m - 1], corners[0]) {
            corners.pop();
        } else if axis_collinear(corners[m - 1], corners[0], corners[1]) {
            corners.remove(0);
        } else {
            break;
        }
    }

    if corners.len() < 4 {
        return Err(InputIssue::TooFewVertices {
            count: corners.len(),
        });
    }

    Ok(corners)
}
