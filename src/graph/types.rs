//! Core type definitions shared by the storage engines

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;

/// Requirements on a caller-chosen vertex type
///
/// Vertices are opaque values compared by equality and hashing. `Debug` is
/// needed so errors and log lines can name the offending vertex.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexKey for T {}

/// A logical edge as reported by edge listings: (source, target, weight)
pub type EdgeTriple<V, W> = (V, V, W);

/// Insertion-ordered map keyed with the Fx hasher
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered set keyed with the Fx hasher
pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;
