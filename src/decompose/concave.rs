//! Resolving the concave vertices left after the diagonal cuts.
//!
//! Each remaining reflex corner shoots a vertical ray into the interior and
//! the first horizontal edge it meets is split there. Horizontal edges are
//! kept in two dynamic interval trees by travel direction: with the interior
//! on the left, a leftward edge bounds the region from above and a rightward
//! edge from below, so an upward ray only ever stops at a leftward edge.

use super::loops::{is_concave, LoopGraph, Segment};
use crate::error::DecomposeError;
use crate::primitives::{Axis, Point2};
use crate::spatial::IntervalTree;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::trace;

type EdgeTree<F> = IntervalTree<F, Segment<F>>;

/// Splits every concave vertex of `graph`, returning how many rays were cast.
///
/// Fails with [`DecomposeError::GeometryInconsistency`] when a ray escapes
/// the polygon, which only happens when the loops cross each other or
/// themselves.
pub(crate) fn resolve_concave<F: Float>(graph: &mut LoopGraph<F>) -> Result<usize, DecomposeError> {
    let (horizontal, _) = graph.edges();
    let (leftward, rightward): (Vec<_>, Vec<_>) = horizontal
        .into_iter()
        .partition(|s| graph.point(s.end).x < graph.point(s.start).x);
    let mut leftward = EdgeTree::build(leftward);
    let mut rightward = EdgeTree::build(rightward);

    let mut splits = 0;
    for v in graph.concave_vertices() {
        let p = graph.point(v);
        let (prev, next) = (graph.prev(v), graph.next(v));
        let before = graph.point(graph.distinct_prev(v));
        let after = graph.point(graph.distinct_next(v));
        if !is_concave(before, p, after) {
            // An earlier ray landed on this corner and already split it.
            graph.clear_concave(v);
            continue;
        }

        let prev_vertical = before.x == p.x;
        let up = if prev_vertical {
            before.y < p.y
        } else {
            after.y < p.y
        };

        let blocker = if up {
            nearest(&leftward, p, up)
        } else {
            nearest(&rightward, p, up)
        }
        .ok_or(DecomposeError::GeometryInconsistency(
            "concave vertex has no blocking edge",
        ))?;

        let hit = Point2::new(p.x, blocker.fixed);
        let path = graph.vertex(blocker.start).path;
        let split_a = graph.push_vertex(hit, path);
        let split_b = graph.push_vertex(hit, path);
        graph.link(blocker.start, split_a);
        graph.link(split_b, blocker.end);

        let tree = if up { &mut leftward } else { &mut rightward };
        tree.remove(&blocker)
            .ok_or(DecomposeError::GeometryInconsistency(
                "blocking edge missing from index",
            ))?;
        tree.insert(Segment::new(graph, blocker.start, split_a, Axis::X));
        tree.insert(Segment::new(graph, split_b, blocker.end, Axis::X));

        if prev_vertical {
            graph.link(split_a, v);
            graph.link(prev, split_b);
        } else {
            graph.link(split_a, next);
            graph.link(v, split_b);
        }
        graph.clear_concave(v);
        splits += 1;

        trace!(vertex = v, up, split_a, split_b, "split concave vertex");
    }

    Ok(splits)
}

/// The closest edge stabbed at `p.x` strictly above (`up`) or below `p`.
fn nearest<F: Float>(tree: &EdgeTree<F>, p: Point2<F>, up: bool) -> Option<Segment<F>> {
    tree.query_point(p.x)
        .filter(|s| if up { s.fixed > p.y } else { s.fixed < p.y })
        .min_by(|a, b| {
            let ord = a.fixed.partial_cmp(&b.fixed).unwrap_or(Ordering::Equal);
            if up {
                ord
            } else {
                ord.reverse()
            }
        })
        .copied()
}
