//! Cutting selected diagonals and walking the resulting loops.

use super::loops::{LoopGraph, Segment, VertexId};
use num_traits::Float;
use tracing::trace;

/// Cuts the polygon along `diagonal`, turning one loop into two (or two loops
/// into one when the diagonal bridges a hole).
///
/// Both endpoints stop being concave. The relinking depends on whether the
/// edge arriving at each endpoint is parallel to the diagonal.
pub(crate) fn cut_diagonal<F: Float>(graph: &mut LoopGraph<F>, diagonal: &Segment<F>) {
    let (a, b) = (diagonal.start, diagonal.end);
    let (pa, na) = (graph.prev(a), graph.next(a));
    let (pb, nb) = (graph.prev(b), graph.next(b));

    graph.clear_concave(a);
    graph.clear_concave(b);

    let shared = diagonal.along.other();
    let a_parallel = graph.point(pa).coord(shared) == graph.point(a).coord(shared);
    let b_parallel = graph.point(pb).coord(shared) == graph.point(b).coord(shared);

    match (a_parallel, b_parallel) {
        (true, true) => {
            graph.link(pb, a);
            graph.link(pa, b);
        }
        (true, false) => {
            graph.link(b, a);
            graph.link(pa, nb);
        }
        (false, true) => {
            graph.link(a, b);
            graph.link(pb, na);
        }
        (false, false) => {
            graph.link(a, nb);
            graph.link(b, na);
        }
    }

    trace!(a, b, a_parallel, b_parallel, "cut diagonal");
}

/// Partitions every vertex into the cycles formed by `next`.
pub(crate) fn find_loops<F: Float>(graph: &LoopGraph<F>) -> Vec<Vec<VertexId>> {
    let mut visited = vec![false; graph.len()];
    let mut loops = Vec::new();
    for start in 0..graph.len() {
        if visited[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut v = start;
        while !visited[v] {
            visited[v] = true;
            cycle.push(v);
            v = graph.next(v);
        }
        loops.push(cycle);
    }
    loops
}
