//! Error taxonomy shared by both storage engines

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during graph operations
///
/// Every failing primitive leaves the store exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(V),

    #[error("Vertex {0:?} not found")]
    VertexNotFound(V),

    #[error("Edge ({0:?}, {1:?}) not found")]
    EdgeNotFound(V, V),

    #[error("Edge ({0:?}, {1:?}) already exists")]
    EdgeAlreadyExists(V, V),
}

impl<V: Debug> GraphError<V> {
    /// Returns true for `VertexNotFound`
    pub fn is_vertex_not_found(&self) -> bool {
        matches!(self, GraphError::VertexNotFound(_))
    }

    /// Returns true for `EdgeNotFound`
    pub fn is_edge_not_found(&self) -> bool {
        matches!(self, GraphError::EdgeNotFound(..))
    }
}

pub type GraphResult<T, V> = Result<T, GraphError<V>>;
