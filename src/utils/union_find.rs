//! Disjoint-set forest with path compression and union by rank.
//!
//! Used by Kruskal's algorithm to reject cycle-forming edges, and by [`Graph::component_count`]
//! for brute-force connectivity checks. The parent and rank arrays are exposed read-only so the
//! step recorder can snapshot them.
//!
//! [`Graph::component_count`]: crate::Graph::component_count
//!
//! # Example
//!
//! ```rust
//! use algostep::utils::UnionFind;
//!
//! let mut sets = UnionFind::new(4);
//! assert!(sets.union(0, 1));
//! assert!(sets.union(2, 3));
//! assert!(!sets.union(1, 0));
//!
//! assert_eq!(sets.find(0), sets.find(1));
//! assert_ne!(sets.find(1), sets.find(2));
//! assert_eq!(sets.set_count(), 2);
//! ```

/// A union-find structure over the elements `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the representative of `x`'s set.
    ///
    /// Every element visited on the way to the root is repointed directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            return x;
        }
        let root = self.find(parent);
        self.parent[x] = root;
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The lower-rank root is attached under the higher-rank root; on a tie, `x`'s root survives
    /// and its rank grows by one. Returns `false` without changes if both are already in the same
    /// set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        if self.rank[root_x] == self.rank[root_y] {
            self.rank[root_x] += 1;
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` if `x` and `y` share a representative.
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Raw parent pointers, for snapshots.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    /// Raw ranks, for snapshots.
    #[must_use]
    pub fn ranks(&self) -> &[u32] {
        &self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_singletons() {
        let mut sets = UnionFind::new(3);
        assert_eq!(sets.set_count(), 3);
        for x in 0..3 {
            assert_eq!(sets.find(x), x);
        }
    }

    #[test]
    fn test_union_by_rank_tie_keeps_first_root() {
        let mut sets = UnionFind::new(2);
        assert!(sets.union(0, 1));
        assert_eq!(sets.parents(), &[0, 0]);
        assert_eq!(sets.ranks(), &[1, 0]);
    }

    #[test]
    fn test_union_attaches_lower_rank() {
        let mut sets = UnionFind::new(3);
        sets.union(1, 2); // root 1, rank 1
        sets.union(0, 1); // rank(0)=0 < rank(1)=1, so 0 goes under 1
        assert_eq!(sets.find(0), 1);
        assert_eq!(sets.ranks()[1], 1);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut sets = UnionFind::new(3);
        sets.union(0, 1);
        let before = sets.clone();
        assert!(!sets.union(1, 0));
        assert_eq!(sets, before);
    }

    #[test]
    fn test_path_compression_repoints_to_root() {
        let mut sets = UnionFind::new(4);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(0, 2);
        // 3 -> 2 -> 0 before compression
        assert_eq!(sets.parents()[3], 2);
        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.parents()[3], 0);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut sets = UnionFind::new(6);
        sets.union(0, 1);
        sets.union(1, 2);
        sets.union(4, 5);
        for x in 0..6 {
            let first = sets.find(x);
            assert_eq!(sets.find(x), first);
        }
    }

    #[test]
    fn test_transitive_membership() {
        let unions = [(0, 1), (2, 3), (1, 3), (5, 6), (7, 7)];
        let mut sets = UnionFind::new(8);
        for (x, y) in unions {
            sets.union(x, y);
        }

        // Naive closure for comparison
        let mut label: Vec<usize> = (0..8).collect();
        for _ in 0..8 {
            for (x, y) in unions {
                let low = label[x].min(label[y]);
                label[x] = low;
                label[y] = low;
            }
        }
        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(sets.same_set(x, y), label[x] == label[y], "{x} vs {y}");
            }
        }
    }
}
