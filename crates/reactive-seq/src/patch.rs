//! Patch engine: deterministically applies a delta to a snapshot.
//!
//! Application either succeeds atomically, is a no-op, or fails
//! synchronously; no partial state is ever observable. A conflicting
//! interior insertion is rejected rather than silently shifted, because
//! shifting indices would corrupt consumer state.

use thiserror::Error;

use crate::delta::{Delta, ListDelta};
use crate::model::{ListModel, Model};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The append index does not line up with the current size. Interior
    /// insert/delete merging is unimplemented; the caller must
    /// resynchronize, typically by requesting a full replacement.
    #[error("cannot resolve conflicting insertion at position {at} against current size {len}")]
    UnsupportedReconciliation { at: usize, len: usize },
    /// The delta kind does not match the kind of the model it was applied
    /// to. A programming-contract violation, not a recoverable condition.
    #[error("delta kind does not match model kind")]
    InvalidDeltaVariant,
}

/// Applies `delta` to `current`, producing the next snapshot.
///
/// The caller asserts that `current` corresponds to the snapshot the delta
/// was computed from; beyond the index check on appends the engine cannot
/// verify this.
pub fn apply_list(current: &ListModel, delta: &ListDelta) -> Result<ListModel, PatchError> {
    match delta {
        ListDelta::NoChange => Ok(current.clone()),
        ListDelta::Replace { values } => Ok(replace_with(values)),
        ListDelta::Append { values, at } => {
            // An append at position 0 is the compact encoding for
            // initialize/replace and is valid against any current snapshot.
            if *at == 0 {
                return Ok(replace_with(values));
            }
            if *at != current.len() {
                return Err(PatchError::UnsupportedReconciliation {
                    at: *at,
                    len: current.len(),
                });
            }
            let mut next = current.clone();
            for value in values {
                next = next.add(value.clone());
            }
            Ok(next)
        }
    }
}

fn replace_with(values: &[Model]) -> ListModel {
    values.iter().cloned().collect()
}

/// Applies a model-level delta to `current`, producing the next node.
pub fn apply(current: &Model, delta: &Delta) -> Result<Model, PatchError> {
    match delta {
        Delta::Value { new_value } => Ok(new_value.clone()),
        Delta::List(list_delta) => match current {
            Model::List(list) => Ok(Model::List(apply_list(list, list_delta)?)),
            Model::Primitive(_) => Err(PatchError::InvalidDeltaVariant),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i64]) -> ListModel {
        values.iter().map(|n| Model::primitive(*n)).collect()
    }

    #[test]
    fn no_change_returns_the_current_snapshot() {
        let current = list(&[1, 2]);
        let next = apply_list(&current, &ListDelta::NoChange).expect("no-op apply");
        assert_eq!(next, current);
    }

    #[test]
    fn replace_discards_the_current_snapshot() {
        let current = list(&[1, 2, 3]);
        let delta = ListDelta::Replace {
            values: vec![Model::primitive(9)],
        };
        let next = apply_list(&current, &delta).expect("replace apply");
        assert_eq!(next, list(&[9]));
    }

    #[test]
    fn append_at_current_size_extends_the_tail() {
        let current = list(&[1, 2]);
        let delta = ListDelta::Append {
            values: vec![Model::primitive(3), Model::primitive(4)],
            at: 2,
        };
        let next = apply_list(&current, &delta).expect("tail apply");
        assert_eq!(next, list(&[1, 2, 3, 4]));
        assert_eq!(current, list(&[1, 2]));
    }

    #[test]
    fn append_at_zero_replaces_even_a_non_empty_snapshot() {
        let current = list(&[1, 2, 3]);
        let delta = ListDelta::Append {
            values: vec![Model::primitive(7)],
            at: 0,
        };
        let next = apply_list(&current, &delta).expect("index-0 apply");
        assert_eq!(next, list(&[7]));
    }

    #[test]
    fn interior_append_is_rejected() {
        let current = list(&[1, 2, 3]);
        let delta = ListDelta::Append {
            values: vec![Model::primitive(9)],
            at: 2,
        };
        assert_eq!(
            apply_list(&current, &delta),
            Err(PatchError::UnsupportedReconciliation { at: 2, len: 3 })
        );
    }

    #[test]
    fn append_past_the_tail_is_rejected() {
        let current = list(&[1]);
        let delta = ListDelta::Append {
            values: vec![Model::primitive(9)],
            at: 5,
        };
        assert_eq!(
            apply_list(&current, &delta),
            Err(PatchError::UnsupportedReconciliation { at: 5, len: 1 })
        );
    }

    #[test]
    fn value_delta_replaces_any_node() {
        let current = Model::List(list(&[1]));
        let delta = Delta::Value {
            new_value: Model::primitive("fresh"),
        };
        assert_eq!(
            apply(&current, &delta),
            Ok(Model::primitive("fresh"))
        );
    }

    #[test]
    fn sequence_delta_on_a_primitive_is_rejected() {
        let current = Model::primitive(1);
        let delta = Delta::List(ListDelta::NoChange);
        assert_eq!(apply(&current, &delta), Err(PatchError::InvalidDeltaVariant));
    }
}
