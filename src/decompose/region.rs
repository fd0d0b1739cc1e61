//! Reading rectangles off the final loops.

use super::cut::find_loops;
use super::loops::LoopGraph;
use crate::bounds::Aabb2;
use crate::error::DecomposeError;
use crate::polygon::polygon_signed_area;
use num_traits::Float;
use tracing::trace;

/// Emits the bounding box of every loop.
///
/// Once all concave vertices are gone each loop is a rectangle, possibly with
/// extra collinear corners from splits. Zero-area loops, which appear when a
/// ray lands exactly on an existing corner, are dropped. A loop with a corner
/// off its bounding box, or wound backwards, means the input was inconsistent.
pub(crate) fn extract_regions<F: Float>(
    graph: &LoopGraph<F>,
) -> Result<Vec<Aabb2<F>>, DecomposeError> {
    let mut regions = Vec::new();
    for cycle in find_loops(graph) {
        let points: Vec<_> = cycle.iter().map(|&v| graph.point(v)).collect();
        let Some(bounds) = Aabb2::from_points(points.iter().copied()) else {
            continue;
        };
        if bounds.is_degenerate() {
            trace!(corners = points.len(), "skipped degenerate loop");
            continue;
        }
        if !points.iter().all(|&p| bounds.on_boundary(p)) {
            return Err(DecomposeError::GeometryInconsistency(
                "region is not a rectangle",
            ));
        }
        if polygon_signed_area(&points) <= F::zero() {
            return Err(DecomposeError::GeometryInconsistency(
                "region is wound backwards",
            ));
        }
        regions.push(bounds);
    }
    Ok(regions)
}
