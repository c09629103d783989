//! Example that builds the nine-vertex weighted sample graph and prints the
//! result of every algorithm.
//!
//! Usage:
//!   cargo run --example graph_demo
//!   cargo run --example graph_demo -- --start 4 --timings

use std::process;

use clap::Parser;
use weighted_graph::{prelude::*, tracing_support};

const SAMPLE_EDGES: [(VertexId, VertexId, Weight); 14] = [
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

/// Run BFS, DFS, Kruskal, Prim and Dijkstra on a sample graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex to start the searches, Prim's method and Dijkstra's method from
    #[arg(long, default_value_t = 0)]
    start: VertexId,

    /// Print how long each algorithm took
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    if args.timings {
        tracing_support::reset_method_timings();
    }
    if let Err(err) = run(args.start) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
    if args.timings {
        tracing_support::dump_method_timings();
    }
}

fn run(start: VertexId) -> Result<(), GraphError> {
    let mut graph = Graph::with_edge_capacity(9, SAMPLE_EDGES.len());
    for (u, v, w) in SAMPLE_EDGES {
        graph.add_edge(u, v, w)?;
    }

    println!(
        "Undirected weighted graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("\n--- Breadth-first search ---");
    println!("BFS (starting from {start}): {}", join(graph.bfs(start)?));

    println!("\n--- Depth-first search ---");
    println!("DFS (starting from {start}): {}", join(graph.dfs(start)?));

    println!("\n--- Minimum spanning tree ---");
    println!("Kruskal's MST edges (u-v, weight):");
    println!("{}", graph.kruskal_mst());
    println!("\nPrim's MST edges (u-v, weight), starting from {start}:");
    println!("{}", graph.prim_mst(start)?);

    println!("\n--- Shortest paths ---");
    println!("Dijkstra (starting from {start}):");
    println!("{}", graph.dijkstra(start)?);
    Ok(())
}

fn join(vertices: impl Iterator<Item = VertexId>) -> String {
    vertices
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
