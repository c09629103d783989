use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Broad classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a vertex or weight the operation cannot accept.
    InvalidArgument,
    /// An accumulated distance no longer fits in a [`Weight`].
    Overflow,
}

/// Errors returned by graph construction and the graph algorithms.
///
/// A disconnected graph is never an error: algorithms that expect
/// connectivity return partial results instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("edge {from}->{to} has negative weight {weight}")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("distance to vertex {vertex} overflows")]
    DistanceOverflow { vertex: VertexId },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexOutOfRange { .. } | GraphError::NegativeWeight { .. } => {
                ErrorKind::InvalidArgument
            }
            GraphError::DistanceOverflow { .. } => ErrorKind::Overflow,
        }
    }
}
