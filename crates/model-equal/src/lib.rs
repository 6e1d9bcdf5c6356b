//! reactive-seq-model-equal - deep equality for primitive slot values.
//!
//! Provides [`deep_equal`] for recursively comparing two
//! [`serde_json::Value`] instances with strict type checking. Numbers are
//! the one exception: integer and float representations of the same numeric
//! value compare equal, so a producer that re-serializes `2` as `2.0` does
//! not force a spurious divergence on the consumer side.

mod deep_equal;

pub use deep_equal::deep_equal;
