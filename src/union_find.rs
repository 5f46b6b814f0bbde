/// Disjoint set over point indices. Tracks which component of the growing spanning forest each
/// point belongs to.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    n_components: usize,
}

impl UnionFind {
    pub(crate) fn new(n_samples: usize) -> Self {
        let parent = (0..n_samples).collect();
        let rank = vec![0; n_samples];
        UnionFind { parent, rank, n_components: n_samples }
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    /// Merges the components holding `m` and `n`. Returns false if they were already joined.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let mut m_root = self.find(m);
        let mut n_root = self.find(n);
        if m_root == n_root {
            return false;
        }
        if self.rank[m_root] < self.rank[n_root] {
            std::mem::swap(&mut m_root, &mut n_root);
        }
        self.parent[n_root] = m_root;
        if self.rank[m_root] == self.rank[n_root] {
            self.rank[m_root] = self.rank[m_root].saturating_add(1);
        }
        self.n_components -= 1;
        true
    }

    pub(crate) fn n_components(&self) -> usize {
        self.n_components
    }
}
