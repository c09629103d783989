use std::fmt;

use bitvec::vec::BitVec;

use crate::{
    error::GraphError,
    graph::{Graph, VertexId, Weight},
    heap::{HeapEntry, IndexedMinHeap},
    tracing_support::info_span,
};

/// Single-source shortest distances computed by [`Graph::dijkstra`].
///
/// An unreachable vertex has no distance, which plays the role of an
/// infinite one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    dist: Vec<Option<Weight>>,
    predecessor: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Gets the distance from the start vertex to `vertex`, or `None` if it is
    /// unreachable or out of range.
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.dist.get(vertex).copied().flatten()
    }

    /// Gets the distance to every vertex, indexed by vertex.
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.dist
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Gets the vertex preceding `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessor.get(vertex).copied().flatten()
    }

    /// Reconstructs a shortest path from the start vertex to `vertex`,
    /// including both ends.  Returns `None` if `vertex` is unreachable.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, dist) in self.dist.iter().enumerate() {
            if vertex > 0 {
                writeln!(f)?;
            }
            match dist {
                Some(d) => write!(f, "  To vertex {}: {}", vertex, d)?,
                None => write!(f, "  To vertex {}: Unreachable", vertex)?,
            }
        }
        Ok(())
    }
}

/// Lazy-deletion Dijkstra.  Instead of lowering a key in place, a relaxed
/// vertex is pushed again, and any popped entry whose distance exceeds the
/// best known one is skipped.  That skip is only sound for non-negative
/// weights, so negative edges are rejected up front.
pub(crate) fn dijkstra(graph: &Graph, start: VertexId) -> Result<ShortestPaths, GraphError> {
    let _span = info_span!("dijkstra", start).entered();
    if let Some(edge) = graph.edges().iter().find(|edge| edge.weight < 0) {
        return Err(GraphError::NegativeWeight {
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        });
    }

    let n = graph.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut heap = IndexedMinHeap::with_capacity(n);
    let mut overflowed: BitVec = BitVec::repeat(false, n);

    dist[start] = Some(0);
    heap.push(0, start);

    while let Some(HeapEntry { key: d, vertex: u }) = heap.pop() {
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        for entry in graph.neighbors(u) {
            let v = entry.neighbor;
            // An overflowing sum is longer than any representable distance,
            // so it can never improve one.
            let Some(candidate) = d.checked_add(entry.weight) else {
                overflowed.set(v, true);
                continue;
            };
            if dist[v].is_none_or(|current| candidate < current) {
                dist[v] = Some(candidate);
                predecessor[v] = Some(u);
                heap.push(candidate, v);
            }
        }
    }

    // Only a vertex whose every path overflows is an error.
    if let Some(vertex) = overflowed.iter_ones().find(|&v| dist[v].is_none()) {
        return Err(GraphError::DistanceOverflow { vertex });
    }

    Ok(ShortestPaths {
        start,
        dist,
        predecessor,
    })
}
