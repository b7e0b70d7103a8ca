//! Store construction settings

use serde::{Deserialize, Serialize};

/// Settings applied when a store is constructed
///
/// Directedness is fixed for the lifetime of the store. The capacity fields
/// are allocation hints only and never change observable behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whether edge (u, v) is distinct from edge (v, u)
    pub directed: bool,
    /// Expected number of vertices
    pub vertex_capacity: usize,
    /// Expected out-degree per vertex (adjacency list only)
    pub neighbor_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            vertex_capacity: 0,
            neighbor_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Config for a directed store
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Config for an undirected store
    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn with_neighbor_capacity(mut self, capacity: usize) -> Self {
        self.neighbor_capacity = capacity;
        self
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
