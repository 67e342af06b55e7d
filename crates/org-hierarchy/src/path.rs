//! Ancestor path lookup
//!
//! Nodes hold no parent pointers, so ancestry is re-derived by walking down
//! from the roots. [`Hierarchy`](crate::Hierarchy) caches the same answer in
//! a per-snapshot index.

use crate::node::{Node, NodeId};
use std::sync::Arc;

/// Ancestor ids of `target`, root first, excluding `target` itself
///
/// Depth-first pre-order over each root in turn; the first subtree that
/// contains `target` wins. A root or an unknown id both yield an empty path.
#[must_use]
pub fn path_ids(forest: &[Arc<Node>], target: &NodeId) -> Vec<NodeId> {
    let mut trail = Vec::new();
    for root in forest {
        if descend(root, target, &mut trail) {
            return trail;
        }
    }
    Vec::new()
}

/// Push ancestors onto `trail` while searching; leaves it untouched on a miss
fn descend(node: &Node, target: &NodeId, trail: &mut Vec<NodeId>) -> bool {
    if node.id() == target {
        return true;
    }

    trail.push(node.id().clone());
    for child in node.children() {
        if descend(child, target, trail) {
            return true;
        }
    }
    trail.pop();
    false
}
