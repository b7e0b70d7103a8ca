//! Adjacency matrix storage engine
//!
//! Dense storage: an N x N table of optional weights addressed by vertex
//! index. Vertex indices are always exactly `0..N`; removing a vertex drops
//! its row and column and shifts every later vertex down by one.

use super::config::GraphConfig;
use super::error::{GraphError, GraphResult};
use super::traits::{validate_existing_vertices, validate_new_vertices, Graph};
use super::types::{EdgeTriple, FxIndexSet, VertexKey};
use super::weight::{Unweighted, WeightPolicy, Weighted};
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Adjacency matrix graph store
///
/// - vertices: index -> vertex and vertex -> index in one ordered set
/// - cells: cells[i][j] holds the weight of edge (vertices[i], vertices[j])
///
/// `None` marks a missing edge, so no sentinel weight is reserved.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<V, P: WeightPolicy> {
    directed: bool,
    vertices: FxIndexSet<V>,
    cells: Vec<Vec<Option<P::Weight>>>,
    _policy: PhantomData<P>,
}

/// Adjacency matrix whose edges carry a `W`
pub type WeightedAdjacencyMatrix<V, W> = AdjacencyMatrix<V, Weighted<W>>;

/// Adjacency matrix whose edges are present or absent
pub type UnweightedAdjacencyMatrix<V> = AdjacencyMatrix<V, Unweighted>;

impl<V: VertexKey, P: WeightPolicy> AdjacencyMatrix<V, P> {
    /// Create a store with the given directedness and initial vertices
    ///
    /// Initial vertices are indexed in iteration order. Fails with
    /// `DuplicateVertex` if `vertices` repeats a vertex.
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
        let mut store = AdjacencyMatrix {
            directed: config.directed,
            vertices: FxIndexSet::with_capacity_and_hasher(
                config.vertex_capacity,
                Default::default(),
            ),
            cells: Vec::with_capacity(config.vertex_capacity),
            _policy: PhantomData,
        };
        store.add_vertices(vertices)?;
        Ok(store)
    }

    /// Dense index currently assigned to `v`
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.vertices.get_index_of(v)
    }

    /// Vertex currently holding index `index`
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get_index(index)
    }

    fn index(&self, v: &V) -> GraphResult<usize, V> {
        self.index_of(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }

    fn endpoints(&self, u: &V, v: &V) -> GraphResult<(usize, usize), V> {
        Ok((self.index(u)?, self.index(v)?))
    }

    /// Grow the table by `count` empty rows and columns
    fn grow(&mut self, count: usize) {
        let n = self.cells.len() + count;
        for row in &mut self.cells {
            row.resize(n, None);
        }
        self.cells.resize(n, vec![None; n]);
    }

    /// Write a cell and, when undirected, its mirror
    fn write(&mut self, i: usize, j: usize, value: Option<P::Weight>) {
        if !self.directed {
            self.cells[j][i] = value.clone();
        }
        self.cells[i][j] = value;
    }
}

impl<V: VertexKey, P: WeightPolicy> Default for AdjacencyMatrix<V, P> {
    fn default() -> Self {
        AdjacencyMatrix {
            directed: false,
            vertices: FxIndexSet::default(),
            cells: Vec::new(),
            _policy: PhantomData,
        }
    }
}

impl<V: VertexKey, P: WeightPolicy> Graph for AdjacencyMatrix<V, P> {
    type Vertex = V;
    type Weight = P::Weight;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, row)| {
                // Undirected: count the upper triangle, diagonal included
                let from = if self.directed { 0 } else { i };
                row[from..].iter().filter(|cell| cell.is_some()).count()
            })
            .sum()
    }

    /// Vertices in index order
    fn vertices(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    fn edges(&self) -> Vec<EdgeTriple<V, P::Weight>> {
        let mut edges = Vec::new();
        for (i, row) in self.cells.iter().enumerate() {
            let from = if self.directed { 0 } else { i };
            for (j, cell) in row.iter().enumerate().skip(from) {
                if let (Some(weight), Some(u), Some(v)) =
                    (cell, self.vertices.get_index(i), self.vertices.get_index(j))
                {
                    edges.push((u.clone(), v.clone(), weight.clone()));
                }
            }
        }
        edges
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(i), Some(j)) => self.cells[i][j].is_some(),
            _ => false,
        }
    }

    fn get_edge_weight(&self, u: &V, v: &V) -> GraphResult<P::Weight, V> {
        let (i, j) = self.endpoints(u, v)?;
        self.cells[i][j]
            .clone()
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))
    }

    /// Scans row `v`: O(V) regardless of degree
    fn get_children(&self, v: &V) -> GraphResult<HashSet<V>, V> {
        let i = self.index(v)?;
        Ok(self.cells[i]
            .iter()
            .zip(self.vertices.iter())
            .filter(|(cell, _)| cell.is_some())
            .map(|(_, w)| w.clone())
            .collect())
    }

    /// Scans column `v`: O(V) regardless of degree
    fn get_parents(&self, v: &V) -> GraphResult<HashSet<V>, V> {
        let j = self.index(v)?;
        Ok(self
            .cells
            .iter()
            .zip(self.vertices.iter())
            .filter(|(row, _)| row[j].is_some())
            .map(|(_, w)| w.clone())
            .collect())
    }

    fn add_vertex(&mut self, v: V) -> GraphResult<(), V> {
        if self.vertices.contains(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        debug!(vertex = ?v, index = self.vertices.len(), "Adding vertex");
        self.vertices.insert(v);
        self.grow(1);
        Ok(())
    }

    /// Validates the whole batch, then grows the table once
    fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        let batch = validate_new_vertices(self, vertices)?;
        if batch.is_empty() {
            return Ok(());
        }
        debug!(count = batch.len(), first_index = self.vertices.len(), "Adding vertices");
        self.grow(batch.len());
        self.vertices.extend(batch);
        Ok(())
    }

    fn remove_vertex(&mut self, v: &V) -> GraphResult<(), V> {
        // shift_remove renumbers every later vertex down by one
        let (index, _) = self
            .vertices
            .shift_remove_full(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))?;

        self.cells.remove(index);
        for row in &mut self.cells {
            row.remove(index);
        }

        debug!(
            vertex = ?v,
            index,
            renumbered = self.vertices.len() - index,
            "Removed vertex"
        );
        Ok(())
    }

    /// Validates the whole batch, then compacts the table in one pass
    fn remove_vertices<I>(&mut self, vertices: I) -> GraphResult<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        let batch = validate_existing_vertices(self, vertices)?;
        if batch.is_empty() {
            return Ok(());
        }

        let doomed: FxHashSet<usize> = batch.iter().filter_map(|v| self.index_of(v)).collect();
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !doomed.contains(i))
            .map(|(_, row)| {
                row.into_iter()
                    .enumerate()
                    .filter(|(j, _)| !doomed.contains(j))
                    .map(|(_, cell)| cell)
                    .collect()
            })
            .collect();

        let doomed_vertices: FxHashSet<&V> = batch.iter().collect();
        self.vertices.retain(|w| !doomed_vertices.contains(w));

        debug!(count = batch.len(), remaining = self.vertices.len(), "Removed vertices");
        Ok(())
    }

    fn set_edge_weight(&mut self, u: &V, v: &V, weight: P::Weight) -> GraphResult<(), V> {
        let (i, j) = self.endpoints(u, v)?;
        if !P::keeps_edge(&weight) {
            self.write(i, j, None);
            return Ok(());
        }
        trace!(source = ?u, target = ?v, ?weight, "Setting edge weight");
        self.write(i, j, Some(weight));
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<P::Weight, V> {
        let (i, j) = self.endpoints(u, v)?;
        let weight = self.cells[i][j]
            .clone()
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))?;
        self.write(i, j, None);
        trace!(source = ?u, target = ?v, "Removed edge");
        Ok(weight)
    }
}
