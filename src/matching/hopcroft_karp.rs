//! Hopcroft-Karp maximum matching and the König construction.

use super::{IndependentSet, IndependentSetSolver};
use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

/// A maximum matching between the two sides of a bipartite graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// Partner of each left vertex.
    pub left: Vec<Option<usize>>,
    /// Partner of each right vertex.
    pub right: Vec<Option<usize>>,
}

impl Matching {
    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.left.iter().filter(|m| m.is_some()).count()
    }
}

/// Computes a maximum matching with the Hopcroft-Karp algorithm.
///
/// Runs in O(E √V).
///
/// # Panics
///
/// Panics if an edge refers to a vertex outside `0..left` or `0..right`.
pub fn maximum_matching(left: usize, right: usize, edges: &[(usize, usize)]) -> Matching {
    let mut adjacency = vec![Vec::new(); left];
    for &(l, r) in edges {
        assert!(r < right, "right vertex {r} out of range");
        adjacency[l].push(r);
    }

    let mut search = Search {
        adjacency: &adjacency,
        pair_left: vec![None; left],
        pair_right: vec![None; right],
        dist: vec![UNREACHED; left],
        shortest: UNREACHED,
    };

    while search.layer() {
        for u in 0..left {
            if search.pair_left[u].is_none() {
                search.augment(u);
            }
        }
    }

    Matching {
        left: search.pair_left,
        right: search.pair_right,
    }
}

struct Search<'a> {
    adjacency: &'a [Vec<usize>],
    pair_left: Vec<Option<usize>>,
    pair_right: Vec<Option<usize>>,
    dist: Vec<usize>,
    /// Length of the shortest augmenting path found by the last `layer`.
    shortest: usize,
}

impl Search<'_> {
    /// Breadth-first layering from the free left vertices. Returns `true` if
    /// an augmenting path exists.
    fn layer(&mut self) -> bool {
        let mut queue = VecDeque::new();
        for (u, pair) in self.pair_left.iter().enumerate() {
            if pair.is_none() {
                self.dist[u] = 0;
                queue.push_back(u);
            } else {
                self.dist[u] = UNREACHED;
            }
        }

        self.shortest = UNREACHED;
        while let Some(u) = queue.pop_front() {
            if self.dist[u] >= self.shortest {
                continue;
            }
            for &v in &self.adjacency[u] {
                match self.pair_right[v] {
                    None => {
                        if self.shortest == UNREACHED {
                            self.shortest = self.dist[u] + 1;
                        }
                    }
                    Some(w) => {
                        if self.dist[w] == UNREACHED {
                            self.dist[w] = self.dist[u] + 1;
                            queue.push_back(w);
                        }
                    }
                }
            }
        }

        self.shortest != UNREACHED
    }

    /// Depth-first search for a shortest augmenting path from `u`.
    fn augment(&mut self, u: usize) -> bool {
        let adjacency = self.adjacency;
        for &v in &adjacency[u] {
            let next = self.dist[u] + 1;
            let reached = match self.pair_right[v] {
                None => next == self.shortest,
                Some(w) => self.dist[w] == next && self.augment(w),
            };
            if reached {
                self.pair_left[u] = Some(v);
                self.pair_right[v] = Some(u);
                return true;
            }
        }
        self.dist[u] = UNREACHED;
        false
    }
}

/// Maximum independent set via Hopcroft-Karp matching and König's theorem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HopcroftKarp;

impl IndependentSetSolver for HopcroftKarp {
    fn solve(&self, left: usize, right: usize, edges: &[(usize, usize)]) -> IndependentSet {
        let matching = maximum_matching(left, right, edges);

        let mut adjacency = vec![Vec::new(); left];
        for &(l, r) in edges {
            adjacency[l].push(r);
        }

        // Alternating reachability from the unmatched left vertices. The
        // minimum cover is (L \ Z) ∪ (R ∩ Z); the independent set is its
        // complement, (L ∩ Z) ∪ (R \ Z).
        let mut seen_left = vec![false; left];
        let mut seen_right = vec![false; right];
        let mut stack: Vec<usize> = (0..left).filter(|&u| matching.left[u].is_none()).collect();
        for &u in &stack {
            seen_left[u] = true;
        }

        while let Some(u) = stack.pop() {
            for &v in &adjacency[u] {
                if seen_right[v] {
                    continue;
                }
                seen_right[v] = true;
                if let Some(w) = matching.right[v] {
                    if !seen_left[w] {
                        seen_left[w] = true;
                        stack.push(w);
                    }
                }
            }
        }

        IndependentSet {
            left: (0..left).filter(|&u| seen_left[u]).collect(),
            right: (0..right).filter(|&v| !seen_right[v]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exhaustive maximum independent set size for tiny graphs.
    fn brute_force_mis(left: usize, right: usize, edges: &[(usize, usize)]) -> usize {
        let n = left + right;
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let ok = edges
                .iter()
                .all(|&(l, r)| mask & (1 << l) == 0 || mask & (1 << (left + r)) == 0);
            if ok {
                best = best.max(mask.count_ones() as usize);
            }
        }
        best
    }

    fn random_graph(left: usize, right: usize, seed: u64) -> Vec<(usize, usize)> {
        let mut state = seed;
        let mut edges = Vec::new();
        for l in 0..left {
            for r in 0..right {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                if state % 3 == 0 {
                    edges.push((l, r));
                }
            }
        }
        edges
    }

    #[test]
    fn test_empty_graph_selects_everything() {
        let set = HopcroftKarp.solve(3, 2, &[]);
        assert_eq!(set.left, vec![0, 1, 2]);
        assert_eq!(set.right, vec![0, 1]);
    }

    #[test]
    fn test_no_vertices() {
        let set = HopcroftKarp.solve(0, 0, &[]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_complete_bipartite() {
        let edges = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)];
        assert_eq!(maximum_matching(3, 2, &edges).size(), 2);

        let set = HopcroftKarp.solve(3, 2, &edges);
        assert_eq!(set.len(), 3);
        assert!(set.is_independent(3, 2, &edges));
        assert_eq!(set.left, vec![0, 1, 2]);
    }

    #[test]
    fn test_path_graph() {
        // l0 - r0 - l1 - r1 - l2
        let edges = [(0, 0), (1, 0), (1, 1), (2, 1)];
        let set = HopcroftKarp.solve(3, 2, &edges);
        assert_eq!(set.len(), 3);
        assert!(set.is_independent(3, 2, &edges));
    }

    #[test]
    fn test_matching_needs_augmentation() {
        // A greedy matching of (0,0) blocks l1; augmenting fixes it.
        let edges = [(0, 0), (0, 1), (1, 0)];
        let m = maximum_matching(2, 2, &edges);
        assert_eq!(m.size(), 2);
        assert_eq!(m.left[1], Some(0));
        assert_eq!(m.left[0], Some(1));
    }

    #[test]
    fn test_duplicate_edges() {
        let edges = [(0, 0), (0, 0), (1, 0)];
        let set = HopcroftKarp.solve(2, 1, &edges);
        assert_eq!(set.len(), 2);
        assert!(set.is_independent(2, 1, &edges));
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in 1..40u64 {
            let left = (seed % 6) as usize + 1;
            let right = ((seed / 6) % 6) as usize + 1;
            let edges = random_graph(left, right, seed * 7919);

            let set = HopcroftKarp.solve(left, right, &edges);
            assert!(set.is_independent(left, right, &edges), "seed {seed}");
            assert_eq!(
                set.len(),
                brute_force_mis(left, right, &edges),
                "seed {seed}"
            );
            assert_eq!(
                set.len(),
                left + right - maximum_matching(left, right, &edges).size(),
                "seed {seed}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_edge_panics() {
        maximum_matching(1, 1, &[(0, 3)]);
    }
}
