//! Graphcore
//!
//! Generic in-memory graph storage with two interchangeable engines that
//! share one contract.
//!
//! # Engines
//!
//! - [`AdjacencyList`]: sparse storage, O(degree) neighbor iteration
//! - [`AdjacencyMatrix`]: dense storage, O(1) edge lookup, O(V) neighbor scans
//!
//! Both are generic over the vertex type and a [`WeightPolicy`]
//! ([`Weighted<W>`] or [`Unweighted`]) and take a directedness flag at
//! construction. In an undirected store edge (u, v) and edge (v, u) are the
//! same logical edge and always agree in presence and weight.
//!
//! # Guarantees
//!
//! - A failing operation leaves the store unchanged
//! - Bulk operations (`add_vertices`, `remove_vertices`, `add_edges`,
//!   `set_edge_weights`, `remove_edges`) either fully succeed or roll back
//! - Matrix vertex indices are always exactly `0..vertex_count()`
//!
//! ## Example Usage
//!
//! ```rust
//! use graphcore::{Graph, GraphError, WeightedAdjacencyList, WeightedAdjacencyMatrix};
//!
//! // Directed, integer-weighted adjacency list
//! let mut list = WeightedAdjacencyList::<u32, i64>::new(true, [1, 2, 3]).unwrap();
//! list.set_edge_weight(&1, &2, 5).unwrap();
//! assert!(list.has_edge(&1, &2));
//! assert!(!list.has_edge(&2, &1));
//! assert_eq!(list.get_edge_weight(&1, &2), Ok(5));
//!
//! // The same code runs against the matrix engine
//! let mut matrix = WeightedAdjacencyMatrix::<u32, i64>::new(true, [1, 2, 3]).unwrap();
//! matrix.set_edge_weight(&1, &2, 5).unwrap();
//!
//! // A failing batch changes nothing
//! let result = matrix.set_edge_weights([(1, 3, 1), (9, 1, 1)]);
//! assert_eq!(result, Err(GraphError::VertexNotFound(9)));
//! assert!(!matrix.has_edge(&1, &3));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyList, AdjacencyMatrix, EdgeTriple, Graph, GraphConfig, GraphError, GraphResult,
    Unweighted, UnweightedAdjacencyList, UnweightedAdjacencyMatrix, VertexKey, WeightPolicy,
    Weighted, WeightedAdjacencyList, WeightedAdjacencyMatrix,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
