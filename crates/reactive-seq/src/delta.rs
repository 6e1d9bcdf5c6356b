//! Delta types: serializable descriptions of snapshot transitions.
//!
//! Closed unions matched exhaustively by the diff engine, the patch engine
//! and the verbose codec. A delta describes the transition from an implicit
//! source snapshot to a target; it carries no version identifiers of its
//! own, so the caller must apply deltas in production order against the
//! correct predecessor.

use crate::model::Model;

/// The transition between two sequence snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum ListDelta {
    /// Target equals source.
    NoChange,
    /// Target is source with `values` appended starting exactly at `at`.
    ///
    /// `at` is authoritative, not advisory: the patch engine checks it
    /// against the current size at apply time and rejects a mismatch.
    Append { values: Vec<Model>, at: usize },
    /// Target is wholly `values`, discarding the source. The recovery path
    /// whenever a change cannot be expressed incrementally.
    Replace { values: Vec<Model> },
}

/// The transition between two model nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    /// Replace the node wholesale with `new_value`, whatever its kind.
    Value { new_value: Model },
    /// A sequence transition; only applicable to a [`Model::List`] node.
    List(ListDelta),
}
