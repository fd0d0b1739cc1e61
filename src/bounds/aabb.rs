//! Axis-aligned rectangles.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned box, defined by its minimum and maximum corners.
///
/// This is also the output type of the decomposition: every emitted rectangle
/// is an `Aabb2` with `min` strictly below `max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the area of the AABB.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns `true` if the box has zero extent on either axis.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.min.x < self.max.x && self.min.y < self.max.y)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the intersection of two AABBs, if they overlap or touch.
    #[inline]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let min = Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));

        if min.x <= max.x && min.y <= max.y {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns the area shared with another AABB; zero when they only touch.
    #[inline]
    pub fn overlap_area(self, other: Self) -> F {
        self.intersection(other).map_or(F::zero(), Self::area)
    }

    /// Returns `true` if this AABB contains the given point (boundary included).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the point lies on the boundary of this AABB.
    #[inline]
    pub fn on_boundary(self, p: Point2<F>) -> bool {
        self.contains_point(p)
            && (p.x == self.min.x || p.x == self.max.x || p.y == self.min.y || p.y == self.max.y)
    }

    /// Returns `true` if this AABB intersects another AABB.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        // Corners in "wrong" order
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(aabb.min, Point2::new(0.0, 0.0));
        assert_eq!(aabb.max, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.area(), 50.0);
        assert!(!aabb.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        let flat: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 2.0), Point2::new(10.0, 2.0));
        assert!(flat.is_degenerate());
        assert!(Aabb2::from_point(Point2::new(1.0_f64, 1.0)).is_degenerate());
    }

    #[test]
    fn test_on_boundary() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0));
        assert!(aabb.on_boundary(Point2::new(0.0, 1.0)));
        assert!(aabb.on_boundary(Point2::new(2.0, 2.0)));
        assert!(!aabb.on_boundary(Point2::new(2.0, 1.0)));
        assert!(!aabb.on_boundary(Point2::new(5.0, 2.0)));
    }

    #[test]
    fn test_overlap_area_touching_is_zero() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Aabb2::new(Point2::new(1.0, 0.0), Point2::new(2.0, 1.0));
        let c = Aabb2::new(Point2::new(0.5, 0.5), Point2::new(2.0, 2.0));

        assert!(a.intersects(b));
        assert_eq!(a.overlap_area(b), 0.0);
        assert_eq!(a.overlap_area(c), 0.25);
    }

    #[test]
    fn test_intersection_none() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::new(Point2::new(10.0, 10.0), Point2::new(15.0, 15.0));

        assert!(a.intersection(b).is_none());
        assert!(!a.intersects(b));
        assert_eq!(a.overlap_area(b), 0.0);
    }
}
