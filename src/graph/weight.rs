//! Weight policies
//!
//! A store is parameterised by a policy that decides what an edge carries.
//! `Unweighted` stores keep a boolean presence flag, `Weighted<W>` stores
//! keep an arbitrary `W`. Both engines consult the policy through the same
//! hook, so neither duplicates the "false means absent" rule.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Compile-time weighting strategy shared by both engines
pub trait WeightPolicy {
    /// Value attached to an edge. No ordering is assumed.
    type Weight: Clone + PartialEq + Debug;

    /// Whether assigning `weight` leaves an edge in place.
    ///
    /// Returning false turns `set_edge_weight` into an idempotent
    /// "ensure absent".
    fn keeps_edge(weight: &Self::Weight) -> bool;
}

/// Edge presence only; the weight of an existing edge is always `true`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unweighted;

impl WeightPolicy for Unweighted {
    type Weight = bool;

    fn keeps_edge(weight: &bool) -> bool {
        *weight
    }
}

/// Edges carry a value of type `W`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weighted<W>(PhantomData<W>);

impl<W: Clone + PartialEq + Debug> WeightPolicy for Weighted<W> {
    type Weight = W;

    fn keeps_edge(_weight: &W) -> bool {
        true
    }
}
