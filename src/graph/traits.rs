//! The operation set shared by both storage engines
//!
//! Engines implement the single-item primitives. Bulk operations are
//! provided here once, on top of those primitives, and are all-or-nothing:
//! a failure partway through a batch restores the exact pre-call state
//! before the triggering error is returned.

use super::error::{GraphError, GraphResult};
use super::types::{EdgeTriple, FxIndexSet, VertexKey};
use std::collections::HashSet;
use std::fmt::Debug;
use tracing::warn;

/// Uniform graph storage contract
///
/// Algorithm code written against this trait works with either the
/// adjacency list or the adjacency matrix engine.
pub trait Graph {
    /// Caller-chosen vertex type
    type Vertex: VertexKey;

    /// Edge weight (`bool` for unweighted stores)
    type Weight: Clone + PartialEq + Debug;

    /// Whether edge (u, v) is distinct from edge (v, u). Fixed at construction.
    fn is_directed(&self) -> bool;

    fn vertex_count(&self) -> usize;

    /// Number of logical edges. An undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Snapshot of the vertex set
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Every logical edge once. Undirected edges are reported in a single
    /// orientation.
    fn edges(&self) -> Vec<EdgeTriple<Self::Vertex, Self::Weight>>;

    fn has_vertex(&self, v: &Self::Vertex) -> bool;

    /// Never fails: a missing vertex simply means there is no edge.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Weight of edge (u, v)
    ///
    /// Fails with `VertexNotFound` if either endpoint is absent (source
    /// checked first), or `EdgeNotFound` if both exist but are not joined.
    fn get_edge_weight(
        &self,
        u: &Self::Vertex,
        v: &Self::Vertex,
    ) -> GraphResult<Self::Weight, Self::Vertex>;

    /// Vertices w such that edge (v, w) exists
    fn get_children(&self, v: &Self::Vertex) -> GraphResult<HashSet<Self::Vertex>, Self::Vertex>;

    /// Vertices w such that edge (w, v) exists. Same as `get_children` when
    /// undirected.
    fn get_parents(&self, v: &Self::Vertex) -> GraphResult<HashSet<Self::Vertex>, Self::Vertex>;

    /// Insert a vertex with no incident edges
    fn add_vertex(&mut self, v: Self::Vertex) -> GraphResult<(), Self::Vertex>;

    /// Remove a vertex together with every edge incident to it
    fn remove_vertex(&mut self, v: &Self::Vertex) -> GraphResult<(), Self::Vertex>;

    /// Create edge (u, v) or overwrite its weight. Undirected stores also set
    /// (v, u).
    fn set_edge_weight(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
        weight: Self::Weight,
    ) -> GraphResult<(), Self::Vertex>;

    /// Remove edge (u, v), returning the weight it carried. Undirected stores
    /// also remove (v, u).
    fn remove_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
    ) -> GraphResult<Self::Weight, Self::Vertex>;

    /// Insert every vertex of the batch, or none of them
    ///
    /// Fails with `DuplicateVertex` if any vertex is already present or
    /// appears twice in the batch.
    fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<(), Self::Vertex>
    where
        I: IntoIterator<Item = Self::Vertex>,
        Self: Sized,
    {
        let batch = validate_new_vertices(self, vertices)?;
        for v in batch {
            self.add_vertex(v)?;
        }
        Ok(())
    }

    /// Remove every vertex of the batch, or none of them
    ///
    /// Every vertex is checked before anything is removed. Repeated entries
    /// are removed once.
    fn remove_vertices<I>(&mut self, vertices: I) -> GraphResult<(), Self::Vertex>
    where
        I: IntoIterator<Item = Self::Vertex>,
        Self: Sized,
    {
        let batch = validate_existing_vertices(self, vertices)?;
        for v in &batch {
            self.remove_vertex(v)?;
        }
        Ok(())
    }

    /// Like `set_edge_weight`, but fails with `EdgeAlreadyExists` when the
    /// edge is present
    fn add_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
        weight: Self::Weight,
    ) -> GraphResult<(), Self::Vertex> {
        match self.get_edge_weight(u, v) {
            Ok(_) => Err(GraphError::EdgeAlreadyExists(u.clone(), v.clone())),
            Err(GraphError::EdgeNotFound(..)) => self.set_edge_weight(u, v, weight),
            Err(err) => Err(err),
        }
    }

    /// Add every edge of the batch, or none of them
    fn add_edges<I>(&mut self, edges: I) -> GraphResult<(), Self::Vertex>
    where
        I: IntoIterator<Item = EdgeTriple<Self::Vertex, Self::Weight>>,
        Self: Sized,
    {
        let mut journal: Vec<JournalEntry<Self>> = Vec::new();
        for (u, v, weight) in edges {
            if let Err(err) = self.add_edge(&u, &v, weight) {
                warn!(error = %err, undone = journal.len(), "add_edges failed, rolling back");
                restore_weights(self, journal);
                return Err(err);
            }
            journal.push((u, v, None));
        }
        Ok(())
    }

    /// Apply every weight assignment of the batch in order, or none of them
    ///
    /// On failure each edge touched by the batch is put back the way it
    /// was: removed if it did not exist, otherwise restored to its previous
    /// weight.
    fn set_edge_weights<I>(&mut self, edges: I) -> GraphResult<(), Self::Vertex>
    where
        I: IntoIterator<Item = EdgeTriple<Self::Vertex, Self::Weight>>,
        Self: Sized,
    {
        let mut journal: Vec<JournalEntry<Self>> = Vec::new();
        for (u, v, weight) in edges {
            let prior = self.get_edge_weight(&u, &v).ok();
            if let Err(err) = self.set_edge_weight(&u, &v, weight) {
                warn!(error = %err, undone = journal.len(), "set_edge_weights failed, rolling back");
                restore_weights(self, journal);
                return Err(err);
            }
            journal.push((u, v, prior));
        }
        Ok(())
    }

    /// Remove every edge of the batch, or none of them
    ///
    /// Edges removed earlier in a failing batch are re-added with the
    /// weights they carried.
    fn remove_edges<I>(&mut self, edges: I) -> GraphResult<(), Self::Vertex>
    where
        I: IntoIterator<Item = (Self::Vertex, Self::Vertex)>,
        Self: Sized,
    {
        let mut journal: Vec<JournalEntry<Self>> = Vec::new();
        for (u, v) in edges {
            match self.remove_edge(&u, &v) {
                Ok(weight) => journal.push((u, v, Some(weight))),
                Err(err) => {
                    warn!(error = %err, undone = journal.len(), "remove_edges failed, rolling back");
                    restore_weights(self, journal);
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

/// Undo journal entry: an edge and the weight it had before the batch
/// touched it (`None` if it did not exist).
type JournalEntry<G> = (
    <G as Graph>::Vertex,
    <G as Graph>::Vertex,
    Option<<G as Graph>::Weight>,
);

/// Replay a journal backwards, returning each edge to its recorded state.
///
/// Newest entries are undone first so an edge touched twice in one batch
/// ends up with the state recorded before its first touch.
fn restore_weights<G: Graph>(graph: &mut G, journal: Vec<JournalEntry<G>>) {
    for (u, v, prior) in journal.into_iter().rev() {
        match prior {
            Some(weight) => {
                let _ = graph.set_edge_weight(&u, &v, weight);
            }
            None => {
                if graph.has_edge(&u, &v) {
                    let _ = graph.remove_edge(&u, &v);
                }
            }
        }
    }
}

/// Check a batch of vertices for insertion without touching the store.
///
/// Returns the batch in iteration order.
pub(crate) fn validate_new_vertices<G, I>(graph: &G, vertices: I) -> GraphResult<Vec<G::Vertex>, G::Vertex>
where
    G: Graph,
    I: IntoIterator<Item = G::Vertex>,
{
    let mut batch = FxIndexSet::default();
    for v in vertices {
        if graph.has_vertex(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        if let Some(dup) = batch.replace(v) {
            return Err(GraphError::DuplicateVertex(dup));
        }
    }
    Ok(batch.into_iter().collect())
}

/// Check that every vertex of a batch is present, dropping repeats.
pub(crate) fn validate_existing_vertices<G, I>(
    graph: &G,
    vertices: I,
) -> GraphResult<Vec<G::Vertex>, G::Vertex>
where
    G: Graph,
    I: IntoIterator<Item = G::Vertex>,
{
    let mut batch = FxIndexSet::default();
    for v in vertices {
        if !graph.has_vertex(&v) {
            return Err(GraphError::VertexNotFound(v));
        }
        batch.insert(v);
    }
    Ok(batch.into_iter().collect())
}
