//! Union-find over city ids, used by the Kruskal builder.
//!
//! `find` compresses iteratively so long parent chains never grow the call stack.
//! The equal-rank tie-break in `union` decides which root survives, and that in
//! turn fixes which MST edges are kept among equal weights. Do not change it.

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set. Every node on the query path is re-pointed at the root.
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets of `x` and `y` by rank. On equal rank `x`'s root is
    /// attached under `y`'s root. Returns false when they already share a root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (rank_x, rank_y) = (self.rank[root_x], self.rank[root_y]);
        if rank_x < rank_y {
            self.parent[root_x] = root_y;
        } else if rank_x > rank_y {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_x] = root_y;
            self.rank[root_y] += 1;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn new_creates_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
        assert!(!ds.same(0, 1));
    }

    #[test]
    fn empty_set_has_no_elements() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
    }

    #[test]
    fn equal_rank_union_attaches_x_under_y() {
        let mut ds = DisjointSet::new(2);
        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), 1);
        assert_eq!(ds.find(1), 1);
        assert_eq!(ds.rank[1], 1);
        assert_eq!(ds.rank[0], 0);
    }

    #[test]
    fn lower_rank_root_goes_under_higher_rank_root() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1); // root 1, rank 1
        assert!(ds.union(1, 2)); // rank 1 vs 0: 2 goes under 1
        assert_eq!(ds.find(2), 1);
        assert_eq!(ds.rank[1], 1);

        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        assert!(ds.union(2, 0)); // rank 0 vs 1: 2 goes under 1
        assert_eq!(ds.find(2), 1);
    }

    #[test]
    fn union_of_same_set_is_noop() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        let before = (ds.parent.clone(), ds.rank.clone());
        assert!(!ds.union(1, 0));
        assert_eq!((ds.parent.clone(), ds.rank.clone()), before);
    }

    #[test]
    fn find_compresses_path_to_root() {
        let mut ds = DisjointSet::new(5);
        // Build the chain 0 -> 1 -> 2 -> 3 -> 4 by hand.
        ds.parent = vec![1, 2, 3, 4, 4];
        assert_eq!(ds.find(0), 4);
        assert_eq!(ds.parent, vec![4, 4, 4, 4, 4]);
    }

    #[test]
    fn find_handles_long_chains_without_recursion() {
        let n = 200_000;
        let mut ds = DisjointSet::new(n);
        ds.parent = (1..n).chain(std::iter::once(n - 1)).collect();
        assert_eq!(ds.find(0), n - 1);
        assert_eq!(ds.parent[n / 2], n - 1);
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let mut ds = DisjointSet::new(2);
        ds.find(2);
    }
}
