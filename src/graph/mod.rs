//! Graph storage layer
//!
//! This module implements two interchangeable storage engines behind one
//! contract:
//! - `AdjacencyList`: per-vertex neighbor maps, suited to sparse graphs
//! - `AdjacencyMatrix`: dense weight table with O(1) edge lookup
//! - `Graph`: the shared operation set, including all-or-nothing bulk operations
//! - `WeightPolicy`: weighted vs. unweighted edges as a type parameter

pub mod config;
pub mod error;
pub mod list;
pub mod matrix;
pub mod traits;
pub mod types;
pub mod weight;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};
pub use list::{AdjacencyList, UnweightedAdjacencyList, WeightedAdjacencyList};
pub use matrix::{AdjacencyMatrix, UnweightedAdjacencyMatrix, WeightedAdjacencyMatrix};
pub use traits::Graph;
pub use types::{EdgeTriple, VertexKey};
pub use weight::{Unweighted, WeightPolicy, Weighted};
