use crate::{
    error::GraphError,
    mst::{PrimTree, SpanningTree},
    search::{Bfs, Dfs},
    shortest_path::ShortestPaths,
};

/// A vertex identifier in `0..vertex_count`.
pub type VertexId = usize;

/// An edge weight.
pub type Weight = i64;

/// Whether [`Graph::add_edge_with`] inserts one adjacency entry or two.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

/// A logical edge as declared by the caller.  An undirected edge appears in
/// the edge list once, in the orientation it was inserted with.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// One outgoing entry in a vertex's adjacency list.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub neighbor: VertexId,
    pub weight: Weight,
}

/// A weighted graph over a fixed set of vertices `0..vertex_count`.
///
/// Edges can only be added, never removed.  Each vertex owns an adjacency
/// list of `(neighbor, weight)` entries, and the graph separately keeps a flat
/// list of the logical edges for use by [`Self::kruskal_mst`].
///
/// Adjacency lists are traversed most-recently-inserted first, so searches
/// visit the neighbor added last before the ones added earlier.
///
/// All algorithm entry points take `&self` and allocate their own working
/// state, so several of them may run against one graph at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<AdjacencyEntry>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Creates a graph with room for `edge_capacity` logical edges.
    pub fn with_edge_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Gets the number of logical edges, counting an undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns an error if `vertex` is not a vertex of this graph.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.add_edge_with(u, v, weight, Directedness::Undirected)
    }

    /// Adds a directed edge from `u` to `v`.
    pub fn add_directed_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.add_edge_with(u, v, weight, Directedness::Directed)
    }

    /// Adds an edge from `u` to `v`.  The edge list always gains exactly one
    /// entry; an undirected edge additionally adds `u` to `v`'s adjacency
    /// list.  Weights are not validated here.
    pub fn add_edge_with(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
        directedness: Directedness,
    ) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(AdjacencyEntry {
            neighbor: v,
            weight,
        });
        self.edges.push(Edge::new(u, v, weight));
        if !directedness.is_directed() {
            self.adjacency[v].push(AdjacencyEntry {
                neighbor: u,
                weight,
            });
        }
        Ok(())
    }

    /// Gets the logical edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Gets the adjacency entries of `vertex` in traversal order.
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbors(
        &self,
        vertex: VertexId,
    ) -> impl DoubleEndedIterator<Item = AdjacencyEntry> + '_ {
        self.adjacency[vertex].iter().rev().copied()
    }

    /// Gets the number of adjacency entries of `vertex`.
    ///
    /// Panics if `vertex` is out of range.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex].len()
    }

    /// Gets the entry at position `index` of `vertex`'s adjacency list in
    /// traversal order.
    pub(crate) fn neighbor_at(&self, vertex: VertexId, index: usize) -> Option<AdjacencyEntry> {
        let entries = &self.adjacency[vertex];
        let pos = entries.len().checked_sub(index + 1)?;
        Some(entries[pos])
    }

    // Searches

    /// Performs a breadth-first search starting from the given vertex.
    pub fn bfs(&self, start: VertexId) -> Result<Bfs<'_>, GraphError> {
        self.check_vertex(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Performs a depth-first search starting from the given vertex.
    pub fn dfs(&self, start: VertexId) -> Result<Dfs<'_>, GraphError> {
        self.check_vertex(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Checks whether a breadth-first search from vertex 0 reaches every
    /// vertex.  Directed edges are followed only in their declared direction.
    /// A graph with no vertices is considered connected.
    pub fn is_connected(&self) -> bool {
        match self.bfs(0) {
            Ok(bfs) => bfs.count() == self.vertex_count(),
            Err(_) => true,
        }
    }

    // Spanning trees

    /// Builds a minimum spanning tree with Kruskal's method.  On a
    /// disconnected graph the result is a spanning forest with fewer than
    /// `vertex_count - 1` edges.
    pub fn kruskal_mst(&self) -> SpanningTree {
        crate::mst::kruskal(self)
    }

    /// Builds a minimum spanning tree of the component containing `start`
    /// with Prim's method.
    pub fn prim_mst(&self, start: VertexId) -> Result<PrimTree, GraphError> {
        self.check_vertex(start)?;
        Ok(crate::mst::prim(self, start))
    }

    // Shortest paths

    /// Finds the shortest distance from `start` to every vertex using
    /// Dijkstra's method.  Fails if any edge of the graph has a negative
    /// weight.
    pub fn dijkstra(&self, start: VertexId) -> Result<ShortestPaths, GraphError> {
        self.check_vertex(start)?;
        crate::shortest_path::dijkstra(self, start)
    }

    // Components

    /// Partitions the vertices into weakly connected components.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<std::collections::HashSet<VertexId>> {
        let _span = crate::tracing_support::info_span!("connected_components").entered();
        let vertices: Vec<VertexId> = (0..self.vertex_count()).collect();
        pathfinding::prelude::connected_components(&vertices, |&v| {
            self.neighbors(v).map(|entry| entry.neighbor)
        })
    }
}
