//! Centered interval trees for 1D stabbing queries.
//!
//! Each node stores a center coordinate and every interval that contains it,
//! twice: once sorted by ascending `lo` and once by descending `hi`. Intervals
//! entirely below the center go to the left subtree, entirely above to the
//! right. A stabbing query walks a single root-to-leaf path and, at each node,
//! reads one of the two sorted lists only as far as it keeps matching.
//!
//! Two flavours share that layout:
//!
//! - [`StaticIntervalTree`] is bulk-built once and only queried.
//! - [`IntervalTree`] additionally supports [`insert`](IntervalTree::insert) and
//!   [`remove`](IntervalTree::remove).
//!
//! # Example
//!
//! ```
//! use quadratum::spatial::{Interval, IntervalTree};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Span(f64, f64);
//!
//! impl Interval<f64> for Span {
//!     fn lo(&self) -> f64 { self.0 }
//!     fn hi(&self) -> f64 { self.1 }
//! }
//!
//! let mut tree = IntervalTree::build(vec![Span(0.0, 2.0), Span(1.0, 5.0), Span(4.0, 6.0)]);
//! assert_eq!(tree.query_point(1.5).count(), 2);
//!
//! // Queries are plain iterators, so reductions compose directly.
//! let widest = tree.query_point(4.5).max_by(|a, b| (a.1 - a.0).total_cmp(&(b.1 - b.0)));
//! assert_eq!(widest, Some(&Span(1.0, 5.0)));
//!
//! assert!(tree.remove(&Span(1.0, 5.0)).is_some());
//! assert!(tree.remove(&Span(1.0, 5.0)).is_none());
//! assert_eq!(tree.query_point(1.5).count(), 1);
//! ```

use num_traits::Float;
use std::cmp::Ordering;

/// A closed interval `[lo, hi]` on one axis, with `lo <= hi`.
pub trait Interval<F: Float> {
    /// Lower endpoint.
    fn lo(&self) -> F;

    /// Upper endpoint.
    fn hi(&self) -> F;

    /// Returns `true` if `p` lies in `[lo, hi]`.
    #[inline]
    fn contains(&self, p: F) -> bool {
        self.lo() <= p && p <= self.hi()
    }
}

#[derive(Debug, Clone)]
struct IntervalNode<F, T> {
    center: F,
    left: Option<usize>,
    right: Option<usize>,
    /// Intervals containing `center`, ascending by `lo`.
    by_lo: Vec<T>,
    /// The same intervals, descending by `hi`.
    by_hi: Vec<T>,
}

impl<F: Float, T: Interval<F> + Clone> IntervalNode<F, T> {
    fn new(center: F) -> Self {
        Self {
            center,
            left: None,
            right: None,
            by_lo: Vec::new(),
            by_hi: Vec::new(),
        }
    }

    fn add(&mut self, item: T) {
        let lo = item.lo();
        let hi = item.hi();
        let at_lo = self.by_lo.partition_point(|s| s.lo() <= lo);
        self.by_lo.insert(at_lo, item.clone());
        let at_hi = self.by_hi.partition_point(|s| s.hi() >= hi);
        self.by_hi.insert(at_hi, item);
    }
}

/// A dynamic centered interval tree.
///
/// Items are stored by value and found again for removal by equality, so `T`
/// is typically a small `Copy` handle carrying its own endpoints.
///
/// # Complexity
///
/// - Bulk build: O(n log n)
/// - Stabbing query: O(log n + k) for a balanced tree, k being the number of hits
/// - Insert / remove: O(depth + m), m being the size of the node touched
#[derive(Debug, Clone)]
pub struct IntervalTree<F, T> {
    nodes: Vec<IntervalNode<F, T>>,
    root: Option<usize>,
    len: usize,
}

impl<F: Float, T: Interval<F> + Clone + PartialEq> Default for IntervalTree<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, T: Interval<F> + Clone + PartialEq> IntervalTree<F, T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Builds a balanced tree from a batch of intervals.
    pub fn build(items: Vec<T>) -> Self {
        let len = items.len();
        let mut nodes = Vec::new();
        let root = build_recursive(items, &mut nodes);
        Self { nodes, root, len }
    }

    /// Returns the number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no intervals are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an interval.
    pub fn insert(&mut self, item: T) {
        let lo = item.lo();
        let hi = item.hi();
        let mut current = match self.root {
            Some(root) => root,
            None => {
                let root = self.push_node(midpoint(lo, hi));
                self.root = Some(root);
                root
            }
        };

        loop {
            let center = self.nodes[current].center;
            let next = if hi < center {
                self.nodes[current].left
            } else if lo > center {
                self.nodes[current].right
            } else {
                self.nodes[current].add(item);
                self.len += 1;
                return;
            };

            current = match next {
                Some(child) => child,
                None => {
                    let child = self.push_node(midpoint(lo, hi));
                    if hi < center {
                        self.nodes[current].left = Some(child);
                    } else {
                        self.nodes[current].right = Some(child);
                    }
                    child
                }
            };
        }
    }

    /// Removes an interval equal to `item`, returning it.
    ///
    /// Returns `None` if no such interval is stored.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let lo = item.lo();
        let hi = item.hi();
        let mut current = self.root?;

        loop {
            let node = &mut self.nodes[current];
            if hi < node.center {
                current = node.left?;
            } else if lo > node.center {
                current = node.right?;
            } else {
                let at_lo = node.by_lo.iter().position(|s| s == item)?;
                let at_hi = node.by_hi.iter().position(|s| s == item)?;
                node.by_hi.remove(at_hi);
                self.len -= 1;
                return Some(node.by_lo.remove(at_lo));
            }
        }
    }

    /// Returns every stored interval containing `point`.
    ///
    /// The iterator is lazy: stopping early (`any`, `find`) skips the rest of
    /// the walk. Calling `query_point` again restarts from the root.
    pub fn query_point(&self, point: F) -> Stab<'_, F, T> {
        Stab {
            nodes: &self.nodes,
            point,
            node: self.root,
            cursor: 0,
        }
    }

    fn push_node(&mut self, center: F) -> usize {
        self.nodes.push(IntervalNode::new(center));
        self.nodes.len() - 1
    }
}

/// A bulk-built, read-only interval tree.
///
/// Same layout and query behaviour as [`IntervalTree`], without mutation.
#[derive(Debug, Clone)]
pub struct StaticIntervalTree<F, T> {
    tree: IntervalTree<F, T>,
}

impl<F: Float, T: Interval<F> + Clone + PartialEq> StaticIntervalTree<F, T> {
    /// Builds a balanced tree from a batch of intervals.
    pub fn build(items: Vec<T>) -> Self {
        Self {
            tree: IntervalTree::build(items),
        }
    }

    /// Returns the number of stored intervals.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if no intervals are stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns every stored interval containing `point`.
    pub fn query_point(&self, point: F) -> Stab<'_, F, T> {
        self.tree.query_point(point)
    }
}

/// Iterator over the intervals containing a point.
///
/// Created by [`IntervalTree::query_point`] and
/// [`StaticIntervalTree::query_point`].
#[derive(Debug, Clone)]
pub struct Stab<'a, F, T> {
    nodes: &'a [IntervalNode<F, T>],
    point: F,
    node: Option<usize>,
    cursor: usize,
}

impl<'a, F: Float, T: Interval<F>> Iterator for Stab<'a, F, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(idx) = self.node {
            let node = &self.nodes[idx];
            match self.point.partial_cmp(&node.center) {
                Some(Ordering::Less) => {
                    if let Some(item) = node.by_lo.get(self.cursor) {
                        if item.lo() <= self.point {
                            self.cursor += 1;
                            return Some(item);
                        }
                    }
                    self.node = node.left;
                }
                Some(Ordering::Greater) => {
                    if let Some(item) = node.by_hi.get(self.cursor) {
                        if item.hi() >= self.point {
                            self.cursor += 1;
                            return Some(item);
                        }
                    }
                    self.node = node.right;
                }
                Some(Ordering::Equal) => {
                    if let Some(item) = node.by_lo.get(self.cursor) {
                        self.cursor += 1;
                        return Some(item);
                    }
                    self.node = None;
                }
                None => self.node = None,
            }
            self.cursor = 0;
        }
        None
    }
}

#[inline]
fn midpoint<F: Float>(lo: F, hi: F) -> F {
    lo + (hi - lo) / (F::one() + F::one())
}

/// Recursively builds the tree, returning the index of the subtree root.
fn build_recursive<F: Float, T: Interval<F> + Clone>(
    items: Vec<T>,
    nodes: &mut Vec<IntervalNode<F, T>>,
) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    // Median endpoint: at least one interval owns it, so `here` is never empty.
    let mut endpoints: Vec<F> = items.iter().flat_map(|s| [s.lo(), s.hi()]).collect();
    endpoints.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let center = endpoints[endpoints.len() / 2];

    let mut here = Vec::new();
    let mut left = Vec::new();
    let mut right = Vec::new();
    for item in items {
        if item.hi() < center {
            left.push(item);
        } else if item.lo() > center {
            right.push(item);
        } else {
            here.push(item);
        }
    }

    let node_idx = nodes.len();
    nodes.push(IntervalNode::new(center));

    let left = build_recursive(left, nodes);
    let right = build_recursive(right, nodes);

    let mut by_lo = here.clone();
    by_lo.sort_by(|a, b| a.lo().partial_cmp(&b.lo()).unwrap_or(Ordering::Equal));
    let mut by_hi = here;
    by_hi.sort_by(|a, b| b.hi().partial_cmp(&a.hi()).unwrap_or(Ordering::Equal));

    let node = &mut nodes[node_idx];
    node.left = left;
    node.right = right;
    node.by_lo = by_lo;
    node.by_hi = by_hi;

    Some(node_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Span {
        lo: f64,
        hi: f64,
        id: usize,
    }

    impl Interval<f64> for Span {
        fn lo(&self) -> f64 {
            self.lo
        }
        fn hi(&self) -> f64 {
            self.hi
        }
    }

    fn span(lo: f64, hi: f64, id: usize) -> Span {
        Span { lo, hi, id }
    }

    /// Deterministic integer-valued spans (xorshift), so endpoints collide often.
    fn random_spans(count: usize, seed: u64) -> Vec<Span> {
        let mut state = seed;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 50) as f64
        };
        (0..count)
            .map(|id| {
                let a = next();
                let b = next();
                span(a.min(b), a.max(b), id)
            })
            .collect()
    }

    fn sorted_ids<'a>(hits: impl Iterator<Item = &'a Span>) -> Vec<usize> {
        let mut ids: Vec<usize> = hits.map(|s| s.id).collect();
        ids.sort_unstable();
        ids
    }

    fn brute_force(spans: &[Span], p: f64) -> Vec<usize> {
        sorted_ids(spans.iter().filter(|s| s.contains(p)))
    }

    #[test]
    fn test_empty() {
        let tree: IntervalTree<f64, Span> = IntervalTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.query_point(1.0).count(), 0);

        let fixed: StaticIntervalTree<f64, Span> = StaticIntervalTree::build(vec![]);
        assert!(fixed.is_empty());
        assert_eq!(fixed.query_point(1.0).count(), 0);
    }

    #[test]
    fn test_endpoints_are_closed() {
        let tree = StaticIntervalTree::build(vec![span(1.0, 3.0, 0)]);
        assert_eq!(tree.query_point(1.0).count(), 1);
        assert_eq!(tree.query_point(3.0).count(), 1);
        assert_eq!(tree.query_point(0.5).count(), 0);
        assert_eq!(tree.query_point(3.5).count(), 0);
    }

    #[test]
    fn test_degenerate_interval() {
        let tree = StaticIntervalTree::build(vec![span(2.0, 2.0, 0), span(0.0, 4.0, 1)]);
        assert_eq!(sorted_ids(tree.query_point(2.0)), vec![0, 1]);
        assert_eq!(sorted_ids(tree.query_point(2.5)), vec![1]);
    }

    #[test]
    fn test_static_matches_brute_force() {
        let spans = random_spans(300, 0x9E37_79B9_7F4A_7C15);
        let tree = StaticIntervalTree::build(spans.clone());
        assert_eq!(tree.len(), spans.len());

        for i in -2..=104 {
            let p = i as f64 * 0.5;
            assert_eq!(sorted_ids(tree.query_point(p)), brute_force(&spans, p), "p = {p}");
        }
    }

    #[test]
    fn test_dynamic_insert_matches_brute_force() {
        let spans = random_spans(200, 12345);
        let mut tree = IntervalTree::new();
        for s in &spans {
            tree.insert(*s);
        }
        assert_eq!(tree.len(), spans.len());

        for i in 0..=100 {
            let p = i as f64 * 0.5;
            assert_eq!(sorted_ids(tree.query_point(p)), brute_force(&spans, p), "p = {p}");
        }
    }

    #[test]
    fn test_remove_then_query() {
        let spans = random_spans(200, 777);
        let mut tree = IntervalTree::build(spans.clone());

        let (gone, kept): (Vec<Span>, Vec<Span>) = spans.iter().partition(|s| s.id % 3 == 0);
        for s in &gone {
            assert_eq!(tree.remove(s), Some(*s));
        }
        assert_eq!(tree.len(), kept.len());

        for i in 0..=100 {
            let p = i as f64 * 0.5;
            assert_eq!(sorted_ids(tree.query_point(p)), brute_force(&kept, p), "p = {p}");
        }
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut tree = IntervalTree::build(vec![span(0.0, 1.0, 0)]);
        assert_eq!(tree.remove(&span(0.0, 1.0, 1)), None);
        assert_eq!(tree.remove(&span(5.0, 6.0, 0)), None);
        assert_eq!(tree.len(), 1);

        let mut empty: IntervalTree<f64, Span> = IntervalTree::new();
        assert_eq!(empty.remove(&span(0.0, 1.0, 0)), None);
    }

    #[test]
    fn test_split_replaces_interval() {
        // The concave resolver replaces an edge by its two halves.
        let mut tree = IntervalTree::build(vec![span(0.0, 10.0, 0), span(20.0, 30.0, 1)]);
        assert!(tree.remove(&span(0.0, 10.0, 0)).is_some());
        tree.insert(span(0.0, 4.0, 2));
        tree.insert(span(4.0, 10.0, 3));

        assert_eq!(sorted_ids(tree.query_point(4.0)), vec![2, 3]);
        assert_eq!(sorted_ids(tree.query_point(2.0)), vec![2]);
        assert_eq!(sorted_ids(tree.query_point(7.0)), vec![3]);
        assert_eq!(sorted_ids(tree.query_point(25.0)), vec![1]);
    }

    #[test]
    fn test_early_termination_and_restart() {
        let tree = StaticIntervalTree::build(random_spans(100, 42));
        let mut hits = tree.query_point(25.0);
        let first = hits.next();
        drop(hits);
        assert_eq!(tree.query_point(25.0).next(), first);
        assert!(tree.query_point(25.0).any(|s| s.contains(25.0)) == first.is_some());
    }
}
