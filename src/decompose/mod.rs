//! Minimum rectangle decomposition of rectilinear polygons.
//!
//! A rectilinear polygon, given as one or more closed loops (outer boundary
//! and holes), is partitioned into the fewest non-overlapping axis-aligned
//! rectangles whose union is exactly its interior.
//!
//! The pipeline:
//!
//! 1. Ingest the loops into a vertex arena and mark the reflex corners.
//! 2. Find horizontal and vertical diagonals joining pairs of reflex corners.
//! 3. Keep a maximum set of those diagonals that do not cross, via a
//!    bipartite independent set (see [`crate::matching`]).
//! 4. Cut along the kept diagonals.
//! 5. Split every remaining reflex corner with a vertical ray.
//! 6. Read one rectangle off each resulting loop.
//!
//! Cutting along a maximum set of non-crossing diagonals is what makes the
//! result minimal: each diagonal removes two reflex corners at once, every
//! other reflex corner costs one extra rectangle.
//!
//! # Winding
//!
//! All loops share one orientation flag. With `clockwise == false` the outer
//! boundary runs counter-clockwise and holes run clockwise; with `true` it is
//! the other way round. Loops wound against the flag are rejected with
//! [`DecomposeError::GeometryInconsistency`].
//!
//! # Example
//!
//! ```
//! use quadratum::{decompose_region, Point2};
//!
//! // An L: two rectangles.
//! let l = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//! let rects = decompose_region(&[l], false).unwrap();
//! assert_eq!(rects.len(), 2);
//! let area: f64 = rects.iter().map(|r| r.area()).sum();
//! assert_eq!(area, 3.0);
//! ```

mod concave;
mod crossing;
mod cut;
mod diagonal;
mod loops;
mod region;

use crate::bounds::Aabb2;
use crate::error::{DecomposeError, InputIssue};
use crate::matching::{HopcroftKarp, IndependentSetSolver};
use crate::primitives::{Axis, Point2};
use crate::spatial::StaticIntervalTree;
use loops::LoopGraph;
use num_traits::Float;
use tracing::{debug, warn};

/// Counters describing one decomposition run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecompositionStats {
    /// Corners after ingestion cleanup, across all loops.
    pub vertices: usize,
    /// Reflex corners before any cutting.
    pub concave: usize,
    /// Candidate diagonals on both axes.
    pub candidates: usize,
    /// Diagonals actually cut.
    pub selected: usize,
    /// Reflex corners resolved by ray splitting.
    pub splits: usize,
    /// Rectangles emitted.
    pub rectangles: usize,
}

/// Configurable rectangle decomposer.
///
/// # Example
///
/// ```
/// use quadratum::{Decomposer, Point2};
///
/// let square = [
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 0.0),
/// ];
/// let (rects, stats) = Decomposer::new()
///     .clockwise(true)
///     .decompose_with_stats(&[square])
///     .unwrap();
/// assert_eq!(rects.len(), 1);
/// assert_eq!(stats.concave, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decomposer<S = HopcroftKarp> {
    clockwise: bool,
    solver: S,
}

impl Decomposer {
    /// Creates a decomposer for counter-clockwise outer loops, using
    /// Hopcroft-Karp for diagonal selection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: IndependentSetSolver> Decomposer<S> {
    /// Sets the winding of the outer loops.
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Replaces the independent-set solver used to pick diagonals.
    pub fn with_solver<T: IndependentSetSolver>(self, solver: T) -> Decomposer<T> {
        Decomposer {
            clockwise: self.clockwise,
            solver,
        }
    }

    /// Decomposes the polygon bounded by `loops` into rectangles.
    pub fn decompose<F, L>(&self, loops: &[L]) -> Result<Vec<Aabb2<F>>, DecomposeError>
    where
        F: Float,
        L: AsRef<[Point2<F>]>,
    {
        self.decompose_with_stats(loops).map(|(rects, _)| rects)
    }

    /// Like [`decompose`](Self::decompose), also reporting what the pipeline
    /// did.
    pub fn decompose_with_stats<F, L>(
        &self,
        loops: &[L],
    ) -> Result<(Vec<Aabb2<F>>, DecompositionStats), DecomposeError>
    where
        F: Float,
        L: AsRef<[Point2<F>]>,
    {
        let result = self.run(loops);
        if let Err(err @ DecomposeError::GeometryInconsistency(_)) = &result {
            warn!(error = %err, loops = loops.len(), "decomposition failed");
        }
        result
    }

    fn run<F, L>(&self, loops: &[L]) -> Result<(Vec<Aabb2<F>>, DecompositionStats), DecomposeError>
    where
        F: Float,
        L: AsRef<[Point2<F>]>,
    {
        let mut stats = DecompositionStats::default();
        if loops.is_empty() {
            return Ok((Vec::new(), stats));
        }

        let mut graph = LoopGraph::from_loops(loops, self.clockwise)?;
        stats.vertices = graph.len();
        stats.concave = graph.concave_vertices().len();
        debug!(
            loops = loops.len(),
            vertices = stats.vertices,
            concave = stats.concave,
            "ingested loops"
        );

        let (horizontal_edges, vertical_edges) = graph.edges();
        let horizontal_edges = StaticIntervalTree::build(horizontal_edges);
        let vertical_edges = StaticIntervalTree::build(vertical_edges);
        let horizontal = diagonal::find_diagonals(&graph, Axis::Y, &vertical_edges);
        let vertical = diagonal::find_diagonals(&graph, Axis::X, &horizontal_edges);
        stats.candidates = horizontal.len() + vertical.len();

        let selected = crossing::select_diagonals(&self.solver, horizontal, vertical)?;
        stats.selected = selected.len();
        debug!(
            candidates = stats.candidates,
            selected = stats.selected,
            "selected diagonals"
        );

        for d in &selected {
            cut::cut_diagonal(&mut graph, d);
        }

        stats.splits = concave::resolve_concave(&mut graph)?;
        let rects = region::extract_regions(&graph)?;
        stats.rectangles = rects.len();
        debug!(
            splits = stats.splits,
            rectangles = stats.rectangles,
            "extracted rectangles"
        );

        Ok((rects, stats))
    }
}

/// Decomposes a rectilinear polygon into a minimum set of rectangles.
///
/// `loops` holds the outer boundary and any holes, each as a closed sequence
/// of corners (the closing edge is implicit). `clockwise` declares the winding
/// of the outer loops; holes wind the other way.
///
/// Returns an empty list for empty input.
///
/// # Errors
///
/// [`DecomposeError::InvalidInput`] for loops with non-finite coordinates,
/// slanted edges, or fewer than four corners;
/// [`DecomposeError::GeometryInconsistency`] when the loops do not bound a
/// consistently wound polygon.
pub fn decompose_region<F, L>(loops: &[L], clockwise: bool) -> Result<Vec<Aabb2<F>>, DecomposeError>
where
    F: Float,
    L: AsRef<[Point2<F>]>,
{
    Decomposer::new().clockwise(clockwise).decompose(loops)
}

/// Like [`decompose_region`], for loosely shaped coordinate lists such as
/// decoded JSON (`[[[x, y], ...], ...]`).
///
/// Every point must have exactly two coordinates.
pub fn decompose_nested<F, L, P>(loops: &[L], clockwise: bool) -> Result<Vec<Aabb2<F>>, DecomposeError>
where
    F: Float,
    L: AsRef<[P]>,
    P: AsRef<[F]>,
{
    let mut points = Vec::with_capacity(loops.len());
    for (loop_index, raw) in loops.iter().enumerate() {
        let mut corners = Vec::with_capacity(raw.as_ref().len());
        for (point_index, coords) in raw.as_ref().iter().enumerate() {
            let coords = coords.as_ref();
            match *coords {
                [x, y] => corners.push(Point2::new(x, y)),
                _ => {
                    return Err(DecomposeError::invalid(
                        loop_index,
                        InputIssue::MalformedPoint {
                            point_index,
                            len: coords.len(),
                        },
                    ))
                }
            }
        }
        points.push(corners);
    }
    decompose_region(&points, clockwise)
}
