use crate::graph::VertexId;

/// A union-find structure over the vertices `0..len`.
///
/// [`Self::find`] performs full path compression: every vertex visited on the
/// way to the root is repointed directly at the root.  [`Self::unite`] hangs
/// the first root under the second without any rank or size balancing.
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: Vec<VertexId>,
    set_count: usize,
}

impl DisjointSetUnion {
    /// Creates a structure in which every vertex is its own singleton set.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            set_count: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Panics if `vertex` is out of range.
    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = vertex;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.  Returns `false` if they were
    /// already in the same set.
    pub fn unite(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        self.set_count -= 1;
        true
    }

    /// Checks whether `a` and `b` are in the same set.
    pub fn same(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
