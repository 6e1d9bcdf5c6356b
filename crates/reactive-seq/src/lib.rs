//! reactive-seq - persistent sequence model and its diff/patch protocol.
//!
//! A producer mutates an immutable [`ListModel`] snapshot through
//! [`ListModel::assoc`]/[`ListModel::add`], computes a [`Delta`] against the
//! previous snapshot with [`diff::diff`], and ships it to consumers that
//! reconstruct the same snapshot with [`patch::apply`]. If consumer and
//! producer agree on the predecessor snapshot, they converge; any change
//! pattern other than pure tail growth is a divergence and falls back to
//! wholesale replacement.
//!
//! Snapshots, deltas and both engines are pure and immutable: no shared
//! mutable state, no blocking, no I/O. Ordering across a version lineage is
//! the caller's responsibility.

pub mod codec;
pub mod delta;
pub mod diff;
pub mod model;
pub mod patch;
pub mod path;
pub mod walk;

pub use delta::{Delta, ListDelta};
pub use model::{ListModel, Model, ModelError};
pub use patch::PatchError;
pub use reactive_seq_path::Path;
