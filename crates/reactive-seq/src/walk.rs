//! Recursive model walker.
//!
//! The traversal hook for external serialization and rendering code: a
//! closed-union replacement for visitor double-dispatch. Every node is
//! visited exactly once per traversal.

use crate::model::Model;

/// Walks every node in a model tree, calling `callback` on each.
///
/// The callback sees the root first, then every nested value in sequence
/// order.
pub fn walk<F>(model: &Model, callback: &mut F)
where
    F: FnMut(&Model),
{
    callback(model);
    if let Model::List(list) = model {
        for item in list.iter() {
            walk(item, callback);
        }
    }
}
