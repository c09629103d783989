pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod heap;
pub mod mst;
pub mod prelude;
pub mod queue;
pub mod search;
pub mod shortest_path;
pub mod tracing_support;

pub use error::{ErrorKind, GraphError};
pub use graph::{AdjacencyEntry, Directedness, Edge, Graph, VertexId, Weight};
pub use mst::TotalWeight;
