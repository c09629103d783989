pub use crate::error::{ErrorKind, GraphError};
pub use crate::graph::{AdjacencyEntry, Directedness, Edge, Graph, VertexId, Weight};
pub use crate::mst::{PrimTree, SpanningTree, TotalWeight};
pub use crate::search::{Bfs, Dfs};
pub use crate::shortest_path::ShortestPaths;
