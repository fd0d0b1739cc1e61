//! Crossing graph between candidate diagonals and the selection of a
//! non-crossing subset.

use super::loops::Segment;
use crate::error::DecomposeError;
use crate::matching::IndependentSetSolver;
use crate::spatial::StaticIntervalTree;
use num_traits::Float;
use tracing::trace;

/// Tags every candidate with its position and returns each crossing as a
/// `(horizontal, vertical)` index pair.
///
/// Segments that merely touch, including at a shared endpoint, count as
/// crossing: two diagonals from the same concave vertex cannot both be cut.
pub(crate) fn find_crossings<F: Float>(
    horizontal: &mut [Segment<F>],
    vertical: &mut [Segment<F>],
) -> Vec<(usize, usize)> {
    for (i, s) in horizontal.iter_mut().enumerate() {
        s.tag = i;
    }
    for (i, s) in vertical.iter_mut().enumerate() {
        s.tag = i;
    }

    let tree = StaticIntervalTree::build(horizontal.to_vec());
    let mut crossings = Vec::new();
    for v in vertical.iter() {
        for h in tree.query_point(v.fixed) {
            if v.lo <= h.fixed && h.fixed <= v.hi {
                crossings.push((h.tag, v.tag));
            }
        }
    }
    crossings
}

/// Picks a maximum set of mutually non-crossing diagonals.
///
/// The solver's answer is checked: an index out of range or repeated, or a
/// crossing pair inside the selection, fails with
/// [`DecomposeError::GeometryInconsistency`].
pub(crate) fn select_diagonals<F, S>(
    solver: &S,
    mut horizontal: Vec<Segment<F>>,
    mut vertical: Vec<Segment<F>>,
) -> Result<Vec<Segment<F>>, DecomposeError>
where
    F: Float,
    S: IndependentSetSolver + ?Sized,
{
    let crossings = find_crossings(&mut horizontal, &mut vertical);
    trace!(
        horizontal = horizontal.len(),
        vertical = vertical.len(),
        crossings = crossings.len(),
        "built crossing graph"
    );

    let set = solver.solve(horizontal.len(), vertical.len(), &crossings);
    if !set.is_independent(horizontal.len(), vertical.len(), &crossings) {
        return Err(DecomposeError::GeometryInconsistency(
            "solver returned an invalid set of diagonals",
        ));
    }

    let selected = set
        .left
        .iter()
        .map(|&i| horizontal[i])
        .chain(set.right.iter().map(|&i| vertical[i]))
        .collect();
    Ok(selected)
}
