//! Adjacency list storage engine
//!
//! Sparse storage: every vertex owns an insertion-ordered map from neighbor
//! to edge weight. Lookups go through the owning vertex's neighbor map, so
//! neighbor iteration is O(degree) and memory is O(V + E).

use super::config::GraphConfig;
use super::error::{GraphError, GraphResult};
use super::traits::{validate_new_vertices, Graph};
use super::types::{EdgeTriple, FxIndexMap, VertexKey};
use super::weight::{Unweighted, WeightPolicy, Weighted};
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Adjacency list graph store
///
/// - adjacency: V -> (neighbor -> weight), one entry per live vertex
///
/// In an undirected store both halves of an edge are stored, so
/// `adjacency[u][v]` and `adjacency[v][u]` always agree.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, P: WeightPolicy> {
    directed: bool,
    adjacency: FxIndexMap<V, FxIndexMap<V, P::Weight>>,
    /// Pre-allocation hint for new neighbor maps
    neighbor_capacity: usize,
    _policy: PhantomData<P>,
}

/// Adjacency list whose edges carry a `W`
pub type WeightedAdjacencyList<V, W> = AdjacencyList<V, Weighted<W>>;

/// Adjacency list whose edges are present or absent
pub type UnweightedAdjacencyList<V> = AdjacencyList<V, Unweighted>;

impl<V: VertexKey, P: WeightPolicy> AdjacencyList<V, P> {
    /// Create a store with the given directedness and initial vertices
    ///
    /// Fails with `DuplicateVertex` if `vertices` repeats a vertex.
    pub fn new<I>(directed: bool, vertices: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = V>,
    {
        let config = GraphConfig {
            directed,
            ..GraphConfig::default()
        };
        Self::with_config(&config, vertices)
    }

    /// Create a store from a config and initial vertices
    pub fn with_config<I>(config: &GraphConfig, vertices: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = V>,
    {
        let mut store = AdjacencyList {
            directed: config.directed,
            adjacency: FxIndexMap::with_capacity_and_hasher(
                config.vertex_capacity,
                Default::default(),
            ),
            neighbor_capacity: config.neighbor_capacity,
            _policy: PhantomData,
        };
        store.add_vertices(vertices)?;
        Ok(store)
    }

    /// Out-degree of a vertex (degree when undirected)
    pub fn degree(&self, v: &V) -> GraphResult<usize, V> {
        Ok(self.neighbors(v)?.len())
    }

    fn neighbors(&self, v: &V) -> GraphResult<&FxIndexMap<V, P::Weight>, V> {
        self.adjacency
            .get(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }

    fn neighbors_mut(&mut self, v: &V) -> GraphResult<&mut FxIndexMap<V, P::Weight>, V> {
        self.adjacency
            .get_mut(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }

    fn check_endpoints(&self, u: &V, v: &V) -> GraphResult<(), V> {
        self.neighbors(u)?;
        self.neighbors(v)?;
        Ok(())
    }

    /// Remove edge (u, v) and its mirror if present. Both endpoints must exist.
    fn detach(&mut self, u: &V, v: &V) -> Option<P::Weight> {
        let removed = self.adjacency.get_mut(u)?.shift_remove(v);
        if removed.is_some() && !self.directed {
            if let Some(mirror) = self.adjacency.get_mut(v) {
                mirror.shift_remove(u);
            }
        }
        removed
    }
}

impl<V: VertexKey, P: WeightPolicy> Default for AdjacencyList<V, P> {
    fn default() -> Self {
        AdjacencyList {
            directed: false,
            adjacency: FxIndexMap::default(),
            neighbor_capacity: 0,
            _policy: PhantomData,
        }
    }
}

impl<V: VertexKey, P: WeightPolicy> Graph for AdjacencyList<V, P> {
    type Vertex = V;
    type Weight = P::Weight;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        let halves: usize = self.adjacency.values().map(|n| n.len()).sum();
        if self.directed {
            return halves;
        }
        // Self-loops are stored once, every other undirected edge twice
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, neighbors)| neighbors.contains_key(*v))
            .count();
        (halves + loops) / 2
    }

    /// Vertices in insertion order
    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<EdgeTriple<V, P::Weight>> {
        let mut edges = Vec::new();
        for (pos, (u, neighbors)) in self.adjacency.iter().enumerate() {
            for (v, weight) in neighbors {
                // Undirected: keep the half whose source comes first
                if !self.directed {
                    let v_pos = self.adjacency.get_index_of(v).unwrap_or(usize::MAX);
                    if v_pos < pos {
                        continue;
                    }
                }
                edges.push((u.clone(), v.clone(), weight.clone()));
            }
        }
        edges
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains_key(v))
    }

    fn get_edge_weight(&self, u: &V, v: &V) -> GraphResult<P::Weight, V> {
        let neighbors = self.neighbors(u)?;
        self.neighbors(v)?;
        neighbors
            .get(v)
            .cloned()
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))
    }

    fn get_children(&self, v: &V) -> GraphResult<HashSet<V>, V> {
        Ok(self.neighbors(v)?.keys().cloned().collect())
    }

    fn get_parents(&self, v: &V) -> GraphResult<HashSet<V>, V> {
        if !self.directed {
            return self.get_children(v);
        }
        self.neighbors(v)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.contains_key(v))
            .map(|(u, _)| u.clone())
            .collect())
    }

    fn add_vertex(&mut self, v: V) -> GraphResult<(), V> {
        if self.adjacency.contains_key(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        debug!(vertex = ?v, "Adding vertex");
        let neighbors =
            FxIndexMap::with_capacity_and_hasher(self.neighbor_capacity, Default::default());
        self.adjacency.insert(v, neighbors);
        Ok(())
    }

    fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        let batch = validate_new_vertices(self, vertices)?;
        self.adjacency.reserve(batch.len());
        for v in batch {
            self.add_vertex(v)?;
        }
        Ok(())
    }

    fn remove_vertex(&mut self, v: &V) -> GraphResult<(), V> {
        let neighbors = self
            .adjacency
            .shift_remove(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))?;

        if self.directed {
            // Parents are not recorded on v, so every list has to be checked
            for others in self.adjacency.values_mut() {
                others.shift_remove(v);
            }
        } else {
            for w in neighbors.keys() {
                if let Some(others) = self.adjacency.get_mut(w) {
                    others.shift_remove(v);
                }
            }
        }

        debug!(vertex = ?v, dropped_edges = neighbors.len(), "Removed vertex");
        Ok(())
    }

    fn set_edge_weight(&mut self, u: &V, v: &V, weight: P::Weight) -> GraphResult<(), V> {
        self.check_endpoints(u, v)?;

        if !P::keeps_edge(&weight) {
            self.detach(u, v);
            return Ok(());
        }

        trace!(source = ?u, target = ?v, ?weight, "Setting edge weight");
        if !self.directed && u != v {
            self.neighbors_mut(v)?.insert(u.clone(), weight.clone());
        }
        self.neighbors_mut(u)?.insert(v.clone(), weight);
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<P::Weight, V> {
        self.check_endpoints(u, v)?;
        let weight = self
            .detach(u, v)
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))?;
        trace!(source = ?u, target = ?v, "Removed edge");
        Ok(weight)
    }
}
