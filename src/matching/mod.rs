//! Bipartite matching and maximum independent sets.
//!
//! The decomposition needs the largest set of mutually non-crossing
//! diagonals. Horizontal and vertical candidates form the two sides of a
//! bipartite graph whose edges are crossings, so that set is a maximum
//! independent set. By König's theorem it is the complement of a minimum
//! vertex cover, which in turn is read off a maximum matching.
//!
//! The solver sits behind [`IndependentSetSolver`] so callers can plug in
//! their own; [`HopcroftKarp`] is the default.
//!
//! # Example
//!
//! ```
//! use quadratum::matching::{HopcroftKarp, IndependentSetSolver};
//!
//! // Two horizontals each crossing both verticals: keep one whole side.
//! let edges = [(0, 0), (0, 1), (1, 0), (1, 1)];
//! let set = HopcroftKarp.solve(2, 2, &edges);
//! assert_eq!(set.len(), 2);
//! assert!(set.is_independent(2, 2, &edges));
//! ```

mod hopcroft_karp;

pub use hopcroft_karp::{maximum_matching, HopcroftKarp, Matching};

/// A subset of both sides of a bipartite graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndependentSet {
    /// Selected vertices of the left side, ascending.
    pub left: Vec<usize>,
    /// Selected vertices of the right side, ascending.
    pub right: Vec<usize>,
}

impl IndependentSet {
    /// Total number of selected vertices.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Returns `true` if this is a valid independent set of a graph with
    /// `left` and `right` vertices joined by `edges`.
    ///
    /// Every index must be in range and selected at most once, and no edge
    /// may join two selected vertices. The order of the selection is not
    /// checked.
    pub fn is_independent(&self, left: usize, right: usize, edges: &[(usize, usize)]) -> bool {
        let (Some(in_left), Some(in_right)) = (mask(&self.left, left), mask(&self.right, right))
        else {
            return false;
        };
        edges.iter().all(|&(l, r)| {
            !matches!((in_left.get(l), in_right.get(r)), (Some(true), Some(true)))
        })
    }
}

/// Membership flags for `selected` over `0..size`, or `None` when an index is
/// out of range or repeated.
fn mask(selected: &[usize], size: usize) -> Option<Vec<bool>> {
    let mut flags = vec![false; size];
    for &i in selected {
        let flag = flags.get_mut(i)?;
        if *flag {
            return None;
        }
        *flag = true;
    }
    Some(flags)
}

/// Computes a maximum independent set of a bipartite graph.
///
/// Implementations receive the side sizes and the edge list as
/// `(left, right)` index pairs, and must return disjoint, ascending index sets
/// with no edge inside them, of maximum total size.
pub trait IndependentSetSolver {
    /// Solves the graph with `left` and `right` vertices joined by `edges`.
    fn solve(&self, left: usize, right: usize, edges: &[(usize, usize)]) -> IndependentSet;
}

impl<S: IndependentSetSolver + ?Sized> IndependentSetSolver for &S {
    fn solve(&self, left: usize, right: usize, edges: &[(usize, usize)]) -> IndependentSet {
        (**self).solve(left, right, edges)
    }
}
