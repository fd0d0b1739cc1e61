//! Vertex arena and segment model for the loops being decomposed.
//!
//! All loops of one call live in a single arena. `prev`/`next` are arena
//! indices, so cutting and splitting are plain index rewrites and new split
//! vertices are appended at the end. After linking, walking `next` always
//! keeps the interior on the left: clockwise input is linked in reverse.

use crate::error::DecomposeError;
use crate::polygon::validate_rectilinear;
use crate::primitives::{Axis, Point2};
use crate::spatial::{Interval, StaticIntervalTree};
use num_traits::Float;

pub(crate) type VertexId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Vertex<F> {
    pub(crate) point: Point2<F>,
    /// Input loop this vertex came from. Split vertices inherit the loop of
    /// the edge they split.
    pub(crate) path: usize,
    /// Position within the cleaned input loop; meaningless for split vertices.
    pub(crate) index: usize,
    pub(crate) concave: bool,
    pub(crate) prev: VertexId,
    pub(crate) next: VertexId,
}

/// An axis-aligned segment between two arena vertices.
///
/// Keyed for stabbing by its extent `[lo, hi]` on `along`; `fixed` is the
/// shared coordinate on the other axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Segment<F> {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) along: Axis,
    pub(crate) lo: F,
    pub(crate) hi: F,
    pub(crate) fixed: F,
    /// Position in the candidate list while building the crossing graph.
    pub(crate) tag: usize,
}

impl<F: Float> Segment<F> {
    pub(crate) fn new(graph: &LoopGraph<F>, start: VertexId, end: VertexId, along: Axis) -> Self {
        let a = graph.point(start);
        let b = graph.point(end);
        let (sa, sb) = (a.coord(along), b.coord(along));
        Self {
            start,
            end,
            along,
            lo: sa.min(sb),
            hi: sa.max(sb),
            fixed: a.coord(along.other()),
            tag: 0,
        }
    }
}

impl<F: Float> Interval<F> for Segment<F> {
    #[inline]
    fn lo(&self) -> F {
        self.lo
    }

    #[inline]
    fn hi(&self) -> F {
        self.hi
    }
}

/// The linked vertex structure of every loop in one decomposition.
#[derive(Debug, Clone)]
pub(crate) struct LoopGraph<F> {
    vertices: Vec<Vertex<F>>,
    /// Corner count of each cleaned input loop.
    loop_sizes: Vec<usize>,
}

impl<F: Float> LoopGraph<F> {
    /// Validates, cleans and links the input loops, classifying each corner.
    ///
    /// Fails with [`DecomposeError::GeometryInconsistency`] when a loop is
    /// wound against `clockwise`, holes included.
    pub(crate) fn from_loops<L: AsRef<[Point2<F>]>>(
        loops: &[L],
        clockwise: bool,
    ) -> Result<Self, DecomposeError> {
        let graph = Self::link_loops(loops, clockwise)?;
        graph.check_winding(clockwise)?;
        Ok(graph)
    }

    /// [`LoopGraph::from_loops`] without the winding check.
    pub(super) fn link_loops<L: AsRef<[Point2<F>]>>(
        loops: &[L],
        clockwise: bool,
    ) -> Result<Self, DecomposeError> {
        let mut vertices = Vec::new();
        let mut loop_sizes = Vec::with_capacity(loops.len());

        for (path, points) in loops.iter().enumerate() {
            let corners = validate_rectilinear(points.as_ref())
                .map_err(|issue| DecomposeError::invalid(path, issue))?;
            let n = corners.len();
            let base = vertices.len();

            for (index, &cur) in corners.iter().enumerate() {
                let prev = corners[(index + n - 1) % n];
                let next = corners[(index + 1) % n];
                vertices.push(Vertex {
                    point: cur,
                    path,
                    index,
                    concave: is_concave(prev, cur, next) != clockwise,
                    prev: base,
                    next: base,
                });
            }

            for i in 0..n {
                let a = base + i;
                let b = base + (i + 1) % n;
                if clockwise {
                    vertices[a].prev = b;
                    vertices[b].next = a;
                } else {
                    vertices[a].next = b;
                    vertices[b].prev = a;
                }
            }

            loop_sizes.push(n);
        }

        Ok(Self {
            vertices,
            loop_sizes,
        })
    }

    /// Checks every loop against the declared winding.
    ///
    /// A point just right of the middle of a loop's first vertical edge must be
    /// inside the region exactly when the edge direction puts the interior on
    /// that side. Containment is an even-odd count of vertical edges strictly
    /// to the right, half-open in y.
    fn check_winding(&self, clockwise: bool) -> Result<(), DecomposeError> {
        let (_, vertical) = self.edges();
        let vertical = StaticIntervalTree::build(vertical);
        let two = F::one() + F::one();

        let mut base = 0;
        for &n in &self.loop_sizes {
            let (a, b) = (0..n)
                .map(|i| (self.point(base + i), self.point(base + (i + 1) % n)))
                .find(|(a, b)| a.x == b.x)
                .ok_or(DecomposeError::GeometryInconsistency(
                    "loop has no vertical edge",
                ))?;
            let y = (a.y + b.y) / two;
            let crossings = vertical
                .query_point(y)
                .filter(|s| y < s.hi && s.fixed > a.x)
                .count();
            let inside = crossings % 2 == 1;
            if inside != ((b.y < a.y) != clockwise) {
                return Err(DecomposeError::GeometryInconsistency(
                    "loop wound against the declared orientation",
                ));
            }
            base += n;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub(crate) fn vertex(&self, id: VertexId) -> &Vertex<F> {
        &self.vertices[id]
    }

    #[inline]
    pub(crate) fn point(&self, id: VertexId) -> Point2<F> {
        self.vertices[id].point
    }

    #[inline]
    pub(crate) fn prev(&self, id: VertexId) -> VertexId {
        self.vertices[id].prev
    }

    #[inline]
    pub(crate) fn next(&self, id: VertexId) -> VertexId {
        self.vertices[id].next
    }

    /// The nearest predecessor at a different position. Splits can leave
    /// coincident vertices next to each other.
    pub(crate) fn distinct_prev(&self, id: VertexId) -> VertexId {
        let p = self.point(id);
        let mut v = self.prev(id);
        while v != id && self.point(v) == p {
            v = self.prev(v);
        }
        v
    }

    /// The nearest successor at a different position.
    pub(crate) fn distinct_next(&self, id: VertexId) -> VertexId {
        let p = self.point(id);
        let mut v = self.next(id);
        while v != id && self.point(v) == p {
            v = self.next(v);
        }
        v
    }

    #[inline]
    pub(crate) fn is_concave(&self, id: VertexId) -> bool {
        self.vertices[id].concave
    }

    /// Marks a vertex convex. Concave vertices never become concave again.
    #[inline]
    pub(crate) fn clear_concave(&mut self, id: VertexId) {
        self.vertices[id].concave = false;
    }

    /// Makes `b` follow `a`.
    #[inline]
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a].next = b;
        self.vertices[b].prev = a;
    }

    /// Appends an unlinked convex vertex. Callers link it before the next walk.
    pub(crate) fn push_vertex(&mut self, point: Point2<F>, path: usize) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            point,
            path,
            index: 0,
            concave: false,
            prev: id,
            next: id,
        });
        id
    }

    /// Ids of the vertices currently flagged concave, in arena order.
    pub(crate) fn concave_vertices(&self) -> Vec<VertexId> {
        (0..self.vertices.len())
            .filter(|&id| self.is_concave(id))
            .collect()
    }

    /// Returns `true` if `a` and `b` are joined by an input edge.
    pub(crate) fn edge_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        let (va, vb) = (&self.vertices[a], &self.vertices[b]);
        if va.path != vb.path {
            return false;
        }
        let n = self.loop_sizes[va.path];
        let d = (va.index + n - vb.index) % n;
        d == 1 || d == n - 1
    }

    /// Every edge of the current loops, split into those varying along x
    /// (horizontal) and along y (vertical).
    pub(crate) fn edges(&self) -> (Vec<Segment<F>>, Vec<Segment<F>>) {
        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        for id in 0..self.vertices.len() {
            let next = self.vertices[id].next;
            if self.point(id).y == self.point(next).y {
                horizontal.push(Segment::new(self, id, next, Axis::X));
            } else {
                vertical.push(Segment::new(self, id, next, Axis::Y));
            }
        }
        (horizontal, vertical)
    }
}

/// Classifies `cur` as a reflex corner of a counter-clockwise loop.
///
/// Consecutive edges alternate axes, so only the direction of travel along
/// each edge matters: a reflex corner turns clockwise. Straight runs are
/// never reflex.
pub(crate) fn is_concave<F: Float>(prev: Point2<F>, cur: Point2<F>, next: Point2<F>) -> bool {
    if prev.x == cur.x {
        if next.x == cur.x {
            return false;
        }
        let up = prev.y < cur.y;
        let right = cur.x < next.x;
        up == right
    } else {
        if next.y == cur.y {
            return false;
        }
        let right = prev.x < cur.x;
        let up = cur.y < next.y;
        right != up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point2<f64>> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    fn l_shape() -> Vec<Point2<f64>> {
        pts(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0]])
    }

    #[test]
    fn test_concavity_ccw() {
        let graph = LoopGraph::from_loops(&[l_shape()], false).unwrap();
        assert_eq!(graph.concave_vertices(), vec![3]);
        assert_eq!(graph.point(3), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_concavity_flips_with_winding() {
        let mut cw = l_shape();
        cw.reverse();
        let graph = LoopGraph::from_loops(&[cw], true).unwrap();
        let concave = graph.concave_vertices();
        assert_eq!(concave.len(), 1);
        assert_eq!(graph.point(concave[0]), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_links_walk_counter_clockwise() {
        let mut cw = l_shape();
        cw.reverse();
        for (input, clockwise) in [(l_shape(), false), (cw, true)] {
            let graph = LoopGraph::from_loops(&[input], clockwise).unwrap();
            let mut walk = vec![graph.point(0)];
            let mut v = graph.next(0);
            while v != 0 {
                walk.push(graph.point(v));
                assert_eq!(graph.prev(graph.next(v)), v);
                v = graph.next(v);
            }
            assert_eq!(walk.len(), 6);
            assert!(crate::polygon::polygon_signed_area(&walk) > 0.0);
        }
    }

    #[test]
    fn test_edge_adjacent() {
        let graph = LoopGraph::from_loops(&[l_shape()], false).unwrap();
        assert!(graph.edge_adjacent(0, 1));
        assert!(graph.edge_adjacent(0, 5));
        assert!(graph.edge_adjacent(5, 0));
        assert!(!graph.edge_adjacent(0, 3));
    }

    #[test]
    fn test_edge_adjacent_across_loops() {
        let a = pts(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let b = pts(&[[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0]]);
        let graph = LoopGraph::from_loops(&[a, b], false).unwrap();
        assert!(!graph.edge_adjacent(0, 5));
        assert!(graph.edge_adjacent(4, 5));
    }

    #[test]
    fn test_edges_split_by_axis() {
        let graph = LoopGraph::from_loops(&[l_shape()], false).unwrap();
        let (horizontal, vertical) = graph.edges();
        assert_eq!(horizontal.len(), 3);
        assert_eq!(vertical.len(), 3);
        let top = horizontal.iter().find(|s| s.fixed == 2.0).unwrap();
        assert_eq!((top.lo, top.hi), (0.0, 1.0));
        assert!(vertical.iter().all(|s| s.along == Axis::Y));
    }

    #[test]
    fn test_straight_run_is_not_concave() {
        let (a, b, c) = (Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), Point2::new(0.0, 2.0));
        assert!(!is_concave(a, b, c));
        assert!(!is_concave(c, b, a));
        let (a, b, c) = (Point2::new(2.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 0.0));
        assert!(!is_concave(a, b, c));
    }

    #[test]
    fn test_distinct_neighbours_skip_coincident() {
        let mut graph = LoopGraph::from_loops(&[l_shape()], false).unwrap();
        // Insert a duplicate of vertex 1 between 0 and 1.
        let dup = graph.push_vertex(graph.point(1), 0);
        graph.link(0, dup);
        graph.link(dup, 1);
        assert_eq!(graph.prev(1), dup);
        assert_eq!(graph.distinct_prev(1), 0);
        assert_eq!(graph.distinct_next(0), dup);
        assert_eq!(graph.distinct_next(dup), 2);
    }

    #[test]
    fn test_winding_accepts_consistent_loops() {
        let outer = pts(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let hole = pts(&[[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0]]);
        let island = pts(&[[1.5, 1.25], [1.75, 1.25], [1.75, 1.75], [1.5, 1.75]]);
        assert!(LoopGraph::from_loops(&[outer.clone(), hole.clone()], false).is_ok());
        assert!(LoopGraph::from_loops(&[outer.clone(), hole.clone(), island], false).is_ok());

        let reversed: Vec<Vec<Point2<f64>>> = [outer, hole]
            .into_iter()
            .map(|mut l| {
                l.reverse();
                l
            })
            .collect();
        assert!(LoopGraph::from_loops(&reversed, true).is_ok());
    }

    #[test]
    fn test_hole_wound_like_outer_rejected() {
        let outer = pts(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let hole = pts(&[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]]);
        assert!(matches!(
            LoopGraph::from_loops(&[outer.clone(), hole.clone()], false),
            Err(DecomposeError::GeometryInconsistency(_))
        ));
        // Under the clockwise flag the hole is fine but the outer loop is not.
        assert!(matches!(
            LoopGraph::from_loops(&[outer, hole], true),
            Err(DecomposeError::GeometryInconsistency(_))
        ));
    }

    #[test]
    fn test_winding_with_level_corner() {
        // The second hole's bottom edge sits at y = 1.5, level with the
        // middle of the first hole's left edge.
        let outer = pts(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let lower = pts(&[[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0]]);
        let upper = pts(&[[2.5, 1.5], [2.5, 2.5], [3.5, 2.5], [3.5, 1.5]]);
        assert!(LoopGraph::from_loops(&[outer, lower, upper], false).is_ok());
    }

    #[test]
    fn test_invalid_loop_reports_index() {
        let slanted = pts(&[[0.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let err = LoopGraph::from_loops(&[l_shape(), slanted], false).unwrap_err();
        assert!(matches!(err, DecomposeError::InvalidInput { loop_index: 1, .. }));
    }
}
