#![allow(dead_code)]

use quickcheck::{Arbitrary, Gen};
use weighted_graph::prelude::*;

/// The nine-vertex undirected graph used throughout the scenario tests.
pub const SAMPLE_EDGES: [(VertexId, VertexId, Weight); 14] = [
    (0, 1, 4),
    (0, 7, 8),
    (1, 2, 8),
    (1, 7, 11),
    (2, 3, 7),
    (2, 8, 2),
    (2, 5, 4),
    (3, 4, 9),
    (3, 5, 14),
    (4, 5, 10),
    (5, 6, 2),
    (6, 7, 1),
    (6, 8, 6),
    (7, 8, 7),
];

pub fn sample_graph() -> Graph {
    build_graph(9, &SAMPLE_EDGES)
}

pub fn build_graph(vertex_count: usize, edges: &[(VertexId, VertexId, Weight)]) -> Graph {
    let mut graph = Graph::with_edge_capacity(vertex_count, edges.len());
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

/// Shortest distances by repeated relaxation, for checking Dijkstra.
pub fn bellman_ford(graph: &Graph, start: VertexId) -> Vec<Option<Weight>> {
    let n = graph.vertex_count();
    let mut dist = vec![None; n];
    dist[start] = Some(0);
    for _ in 0..n {
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for entry in graph.neighbors(u) {
                let candidate = du + entry.weight;
                if dist[entry.neighbor].is_none_or(|d| candidate < d) {
                    dist[entry.neighbor] = Some(candidate);
                }
            }
        }
    }
    dist
}

const MAX_VERTICES: usize = 12;

fn arbitrary_edge(g: &mut Gen, vertex_count: usize) -> (VertexId, VertexId, Weight) {
    let u = usize::arbitrary(g) % vertex_count;
    let v = usize::arbitrary(g) % vertex_count;
    (u, v, Weight::from(u8::arbitrary(g)))
}

/// A random undirected graph with non-negative weights that is guaranteed to
/// be connected.
#[derive(Clone, Debug)]
pub struct ConnectedGraph {
    pub vertex_count: usize,
    pub edges: Vec<(VertexId, VertexId, Weight)>,
}

impl ConnectedGraph {
    pub fn build(&self) -> Graph {
        build_graph(self.vertex_count, &self.edges)
    }
}

impl Arbitrary for ConnectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = usize::arbitrary(g) % MAX_VERTICES + 1;
        let mut edges = Vec::new();
        // Joins every vertex to some earlier one.
        for v in 1..vertex_count {
            let u = usize::arbitrary(g) % v;
            edges.push((u, v, Weight::from(u8::arbitrary(g))));
        }
        let extra = usize::arbitrary(g) % (2 * vertex_count);
        edges.extend((0..extra).map(|_| arbitrary_edge(g, vertex_count)));
        Self {
            vertex_count,
            edges,
        }
    }
}

/// A random undirected graph with non-negative weights, usually
/// disconnected.
#[derive(Clone, Debug)]
pub struct SparseGraph {
    pub vertex_count: usize,
    pub edges: Vec<(VertexId, VertexId, Weight)>,
}

impl SparseGraph {
    pub fn build(&self) -> Graph {
        build_graph(self.vertex_count, &self.edges)
    }
}

impl Arbitrary for SparseGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = usize::arbitrary(g) % MAX_VERTICES + 1;
        let edge_count = usize::arbitrary(g) % vertex_count;
        Self {
            vertex_count,
            edges: (0..edge_count)
                .map(|_| arbitrary_edge(g, vertex_count))
                .collect(),
        }
    }
}
