//! Candidate diagonals between concave vertices.

use super::loops::{LoopGraph, Segment};
use crate::primitives::Axis;
use crate::spatial::StaticIntervalTree;
use num_traits::Float;
use std::cmp::Ordering;

/// Finds every diagonal joining two concave vertices that share their
/// `shared` coordinate and see each other through the interior.
///
/// `blockers` indexes the input edges running along `shared` (keyed by their
/// extent on that axis); any of them whose fixed coordinate falls strictly
/// between a pair hides the pair. The result is not yet mutually compatible:
/// candidates on the two axes may cross.
pub(crate) fn find_diagonals<F: Float>(
    graph: &LoopGraph<F>,
    shared: Axis,
    blockers: &StaticIntervalTree<F, Segment<F>>,
) -> Vec<Segment<F>> {
    let along = shared.other();

    let mut concave = graph.concave_vertices();
    concave.sort_by(|&a, &b| {
        let (pa, pb) = (graph.point(a), graph.point(b));
        pa.coord(shared)
            .partial_cmp(&pb.coord(shared))
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                pa.coord(along)
                    .partial_cmp(&pb.coord(along))
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut diagonals = Vec::new();
    for pair in concave.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (pa, pb) = (graph.point(a), graph.point(b));
        let line = pa.coord(shared);
        if line != pb.coord(shared) || graph.edge_adjacent(a, b) {
            continue;
        }

        let (lo, hi) = (pa.coord(along), pb.coord(along));
        let hidden = blockers
            .query_point(line)
            .any(|s| lo < s.fixed && s.fixed < hi);
        if !hidden {
            diagonals.push(Segment::new(graph, a, b, along));
        }
    }

    diagonals
}
