//! Core polygon types and area/containment helpers.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon loop represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// A rectilinear region with holes is a slice of these loops, outer boundaries
/// wound one way and holes the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the loop.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl<F> AsRef<[Point2<F>]> for Polygon<F> {
    fn as_ref(&self) -> &[Point2<F>] {
        &self.vertices
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the signed area of an axis-aligned loop from its horizontal edges.
///
/// Vertical edges contribute nothing, so each horizontal edge adds
/// `-(x1 - x0) * y`. For rectilinear loops this agrees with
/// [`polygon_signed_area`] and is exact whenever the products are.
pub fn rectilinear_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    let mut area = F::zero();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if a.y == b.y {
            area = area - (b.x - a.x) * a.y;
        }
    }
    area
}

/// Computes the interior area of a set of rectilinear loops.
///
/// Holes are expected to be wound opposite to their outer boundary, so their
/// contribution subtracts. With `clockwise` set the interior lies to the right
/// of each loop and the sign is flipped accordingly.
pub fn rectilinear_area<F: Float, L: AsRef<[Point2<F>]>>(loops: &[L], clockwise: bool) -> F {
    let total = loops
        .iter()
        .fold(F::zero(), |acc, l| acc + rectilinear_signed_area(l.as_ref()));
    if clockwise {
        -total
    } else {
        total
    }
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Even-odd containment over several loops, so holes punch through their
/// outer boundary.
pub fn loops_contain<F: Float, L: AsRef<[Point2<F>]>>(loops: &[L], point: Point2<F>) -> bool {
    loops
        .iter()
        .filter(|l| polygon_contains(l.as_ref(), point))
        .count()
        % 2
        == 1
}
