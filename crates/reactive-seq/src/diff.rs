//! Diff engine: computes the minimal delta between two snapshots.
//!
//! The policy is deliberately conservative. Only pure tail growth is
//! expressed incrementally; a shrink, or any mismatch inside the shared
//! prefix, counts as a divergence and produces a wholesale
//! [`ListDelta::Replace`]. Prefix equality is checked position by position
//! with value equality, no fuzzy matching.

use crate::delta::{Delta, ListDelta};
use crate::model::{ListModel, Model};

/// Computes the delta turning `source` into `target`.
pub fn diff_list(source: &ListModel, target: &ListModel) -> ListDelta {
    let diverged = target.len() < source.len()
        || source.iter().zip(target.iter()).any(|(a, b)| a != b);
    if diverged {
        return ListDelta::Replace {
            values: target.iter().cloned().collect(),
        };
    }
    if source.len() == target.len() {
        return ListDelta::NoChange;
    }
    ListDelta::Append {
        values: target.iter().skip(source.len()).cloned().collect(),
        at: source.len(),
    }
}

/// Computes the model-level delta from `source` to `target`, `None` when
/// the nodes are equal.
///
/// A kind change (or any primitive change) is a wholesale value
/// replacement; only list-to-list transitions produce an incremental
/// sequence delta.
pub fn diff(source: &Model, target: &Model) -> Option<Delta> {
    match (source, target) {
        (Model::List(a), Model::List(b)) => match diff_list(a, b) {
            ListDelta::NoChange => None,
            delta => Some(Delta::List(delta)),
        },
        _ => {
            if source == target {
                None
            } else {
                Some(Delta::Value {
                    new_value: target.clone(),
                })
            }
        }
    }
}
