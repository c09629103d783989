use std::fmt;

use bitvec::vec::BitVec;

use crate::{
    disjoint_set::DisjointSetUnion,
    graph::{Edge, Graph, VertexId, Weight},
    heap::{HeapEntry, IndexedMinHeap},
    tracing_support::info_span,
};

/// The sum of spanning tree edge weights.  Wider than [`Weight`] so that no
/// edge set of a graph can overflow it.
pub type TotalWeight = i128;

/// The edges chosen by Kruskal's method, in the order they were accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: TotalWeight,
}

impl SpanningTree {
    fn new(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| TotalWeight::from(e.weight)).sum();
        Self {
            edges,
            total_weight,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> TotalWeight {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Checks whether the tree connects all `vertex_count` vertices, i.e.
    /// whether it is a tree rather than a spanning forest.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self.edges.iter().copied(), self.total_weight)
    }
}

/// A spanning tree built by Prim's method, stored as parent pointers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimTree {
    start: VertexId,
    parent: Vec<Option<VertexId>>,
    key: Vec<Option<Weight>>,
    total_weight: TotalWeight,
}

impl PrimTree {
    fn new(start: VertexId, parent: Vec<Option<VertexId>>, key: Vec<Option<Weight>>) -> Self {
        let total_weight = parent
            .iter()
            .zip(&key)
            .filter(|(p, _)| p.is_some())
            .filter_map(|(_, k)| k.map(TotalWeight::from))
            .sum();
        Self {
            start,
            parent,
            key,
            total_weight,
        }
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Gets the vertex through which `vertex` joined the tree.  Returns
    /// `None` for the start vertex, for vertices not reachable from it, and
    /// for out-of-range vertices.
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Gets the weight of the edge through which `vertex` joined the tree, or
    /// `None` if it was never reached.  The start vertex has key 0.
    pub fn key(&self, vertex: VertexId) -> Option<Weight> {
        self.key.get(vertex).copied().flatten()
    }

    pub fn parents(&self) -> &[Option<VertexId>] {
        &self.parent
    }

    /// Gets the tree edges as `(parent, child, weight)`, ordered by child.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.parent
            .iter()
            .zip(&self.key)
            .enumerate()
            .filter_map(|(child, (parent, key))| Some(Edge::new((*parent)?, child, (*key)?)))
    }

    /// Sum of the weights of the tree edges.  Vertices that were not
    /// reached from the start vertex contribute nothing.
    pub fn total_weight(&self) -> TotalWeight {
        self.total_weight
    }

    /// Checks whether every vertex was reached from the start vertex.
    pub fn is_spanning(&self) -> bool {
        self.key.iter().all(Option::is_some)
    }
}

impl fmt::Display for PrimTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self.edges(), self.total_weight)
    }
}

fn write_tree(
    f: &mut fmt::Formatter<'_>,
    edges: impl Iterator<Item = Edge>,
    total_weight: TotalWeight,
) -> fmt::Result {
    for edge in edges {
        writeln!(f, "  {}-{} ({})", edge.source, edge.target, edge.weight)?;
    }
    write!(f, "Total weight: {}", total_weight)
}

pub(crate) fn kruskal(graph: &Graph) -> SpanningTree {
    let _span = info_span!("kruskal_mst").entered();
    let n = graph.vertex_count();
    let wanted = n.saturating_sub(1);

    // Stable, so equal-weight edges keep their insertion order.
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut dsu = DisjointSetUnion::new(n);
    let mut accepted = Vec::with_capacity(wanted);
    for edge in sorted {
        if accepted.len() == wanted {
            break;
        }
        if dsu.unite(edge.source, edge.target) {
            accepted.push(edge);
        }
    }
    SpanningTree::new(accepted)
}

pub(crate) fn prim(graph: &Graph, start: VertexId) -> PrimTree {
    let _span = info_span!("prim_mst", start).entered();
    let n = graph.vertex_count();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_tree: BitVec = BitVec::repeat(false, n);
    let mut heap = IndexedMinHeap::with_capacity(n);

    key[start] = Some(0);
    heap.push(0, start);

    while let Some(HeapEntry { vertex: u, .. }) = heap.pop() {
        // A vertex may sit in the heap several times under keys that have
        // since been lowered; only the first pop counts.
        if in_tree[u] {
            continue;
        }
        in_tree.set(u, true);
        for entry in graph.neighbors(u) {
            let v = entry.neighbor;
            if !in_tree[v] && key[v].is_none_or(|k| entry.weight < k) {
                parent[v] = Some(u);
                key[v] = Some(entry.weight);
                heap.push(entry.weight, v);
            }
        }
    }

    PrimTree::new(start, parent, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_graph() -> Graph {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 10).unwrap();
        graph.add_edge(0, 2, 6).unwrap();
        graph.add_edge(0, 3, 5).unwrap();
        graph.add_edge(1, 3, 15).unwrap();
        graph.add_edge(2, 3, 4).unwrap();
        graph
    }

    #[test]
    fn test_kruskal() {
        let tree = create_sample_graph().kruskal_mst();
        assert_eq!(
            tree.edges(),
            &[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)]
        );
        assert_eq!(tree.total_weight(), 19);
        assert!(tree.is_spanning(4));
    }

    #[test]
    fn test_prim() {
        let tree = create_sample_graph().prim_mst(0).unwrap();
        assert_eq!(tree.total_weight(), 19);
        assert_eq!(tree.parents(), &[None, Some(0), Some(3), Some(0)]);
        assert_eq!(tree.key(0), Some(0));
        assert_eq!(tree.key(2), Some(4));
        assert_eq!(tree.edges().count(), 3);
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_prim_tolerates_stale_entries() {
        // Vertex 2 is pushed with key 9, then again with key 1 once vertex 1
        // joins the tree; the key 9 entry is popped last and discarded.
        let mut graph = Graph::new(3);
        graph.add_edge(0, 2, 9).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        let tree = graph.prim_mst(0).unwrap();
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.total_weight(), 2);
    }

    #[test]
    fn test_kruskal_skips_self_loops_and_parallel_edges() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 0, -1).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 0, 2).unwrap();
        let tree = graph.kruskal_mst();
        assert_eq!(tree.edges(), &[Edge::new(1, 0, 2)]);
    }

    #[test]
    fn test_negative_weights() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, -4).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(0, 2, -1).unwrap();
        assert_eq!(graph.kruskal_mst().total_weight(), -5);
        assert_eq!(graph.prim_mst(2).unwrap().total_weight(), -5);
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(2, 3, 7).unwrap();

        let forest = graph.kruskal_mst();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.total_weight(), 10);
        assert!(!forest.is_spanning(4));

        let tree = graph.prim_mst(2).unwrap();
        assert_eq!(tree.total_weight(), 7);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.key(0), None);
        assert!(!tree.is_spanning());
    }

    #[test]
    fn test_total_weight_exceeds_edge_weight_range() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, Weight::MAX).unwrap();
        graph.add_edge(1, 2, Weight::MAX).unwrap();
        let expected = 2 * TotalWeight::from(Weight::MAX);
        assert_eq!(graph.kruskal_mst().total_weight(), expected);
        assert_eq!(graph.prim_mst(0).unwrap().total_weight(), expected);

        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, Weight::MIN).unwrap();
        graph.add_edge(1, 2, Weight::MIN).unwrap();
        let expected = 2 * TotalWeight::from(Weight::MIN);
        assert_eq!(graph.kruskal_mst().total_weight(), expected);
        assert_eq!(graph.prim_mst(2).unwrap().total_weight(), expected);
    }

    #[test]
    fn test_empty_graph() {
        let tree = Graph::new(0).kruskal_mst();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0);
        assert!(tree.is_spanning(0));
    }

    #[test]
    fn test_display() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        assert_eq!(
            graph.kruskal_mst().to_string(),
            "  1-2 (2)\n  0-1 (4)\nTotal weight: 6"
        );
        assert_eq!(
            graph.prim_mst(0).unwrap().to_string(),
            "  0-1 (4)\n  1-2 (2)\nTotal weight: 6"
        );
    }
}
