//! Tree snapshots
//!
//! A [`Hierarchy`] is one immutable forest plus indexes built once when the
//! snapshot is assembled. A reload produces a new snapshot; nothing is ever
//! patched in place.

use crate::error::HierarchyError;
use crate::expansion::{expandable_ids, ExpansionSet};
use crate::node::{Node, NodeId, PreOrder};
use crate::path::path_ids;
use crate::raw::RawOffice;
use crate::search::{search, SearchResult};
use crate::stats::{stats_for, MemberStats};
use crate::transform::transform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// What to do when one id occurs twice in the same tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Refuse to build the snapshot
    #[default]
    Reject,
    /// Keep the first occurrence in pre-order and log a warning
    Tolerate,
}

/// Row of a rendered tree view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleRow {
    /// The node shown on this row
    pub node: Arc<Node>,
    /// Whether the row is drawn open
    pub expanded: bool,
}

#[derive(Debug, Clone)]
struct IndexedNode {
    node: Arc<Node>,
    ancestors: Vec<NodeId>,
}

/// Immutable tree snapshot with a per-snapshot id index
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    roots: Vec<Arc<Node>>,
    index: HashMap<NodeId, IndexedNode>,
}

impl Hierarchy {
    /// Snapshot with no nodes
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Transform a raw payload and index it
    ///
    /// # Errors
    /// Returns [`HierarchyError::DuplicateNodeId`] when `policy` is
    /// [`DuplicateIdPolicy::Reject`] and an id repeats.
    pub fn from_raw(raw: &[RawOffice], policy: DuplicateIdPolicy) -> Result<Self, HierarchyError> {
        Self::build(transform(raw), policy)
    }

    /// Index an already normalized forest
    ///
    /// # Errors
    /// Returns [`HierarchyError::DuplicateNodeId`] when `policy` is
    /// [`DuplicateIdPolicy::Reject`] and an id repeats.
    pub fn build(roots: Vec<Arc<Node>>, policy: DuplicateIdPolicy) -> Result<Self, HierarchyError> {
        let mut index = HashMap::new();
        let mut trail = Vec::new();
        for root in &roots {
            index_subtree(root, &mut trail, &mut index, policy)?;
        }
        Ok(Self { roots, index })
    }

    /// Root nodes (offices) in source order
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    /// Number of distinct ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the snapshot holds no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Look up a node by id
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Arc<Node>> {
        self.index.get(id).map(|entry| &entry.node)
    }

    /// Cached ancestor path, root first, excluding `id`
    ///
    /// Same answer as [`path_ids`] without re-walking the tree. Unknown ids
    /// and roots both give an empty slice.
    #[must_use]
    pub fn ancestors(&self, id: &NodeId) -> &[NodeId] {
        self.index
            .get(id)
            .map(|entry| entry.ancestors.as_slice())
            .unwrap_or_default()
    }

    /// Ancestor path by depth-first walk from the roots
    #[must_use]
    pub fn path_ids(&self, id: &NodeId) -> Vec<NodeId> {
        path_ids(&self.roots, id)
    }

    /// Search every node, see [`search`]
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search(&self.roots, query)
    }

    /// Member counts under `id`; unknown ids count as empty
    #[must_use]
    pub fn stats_for(&self, id: &NodeId) -> MemberStats {
        self.find(id).map(|node| stats_for(node)).unwrap_or_default()
    }

    /// Ids of every node with children, in pre-order
    #[must_use]
    pub fn all_expandable_ids(&self) -> Vec<NodeId> {
        expandable_ids(&self.roots)
    }

    /// Pre-order iterator over every node
    #[must_use]
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::forest(&self.roots)
    }

    /// Rows a tree view renders for the given expansion state
    ///
    /// Roots are always visible; children show only under a visible,
    /// expanded parent. Expanded ids that are not in this snapshot are
    /// ignored.
    #[must_use]
    pub fn visible_rows(&self, expanded: &ExpansionSet) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<&Arc<Node>> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            let open = node.has_children() && expanded.contains(node.id());
            rows.push(VisibleRow {
                node: Arc::clone(node),
                expanded: open,
            });
            if open {
                stack.extend(node.children().iter().rev());
            }
        }
        rows
    }
}

fn index_subtree(
    node: &Arc<Node>,
    trail: &mut Vec<NodeId>,
    index: &mut HashMap<NodeId, IndexedNode>,
    policy: DuplicateIdPolicy,
) -> Result<(), HierarchyError> {
    if index.contains_key(node.id()) {
        match policy {
            DuplicateIdPolicy::Reject => {
                return Err(HierarchyError::DuplicateNodeId {
                    id: node.id().clone(),
                });
            }
            DuplicateIdPolicy::Tolerate => {
                tracing::warn!(id = %node.id(), "duplicate node id, keeping first occurrence");
            }
        }
    } else {
        index.insert(
            node.id().clone(),
            IndexedNode {
                node: Arc::clone(node),
                ancestors: trail.clone(),
            },
        );
    }

    trail.push(node.id().clone());
    for child in node.children() {
        index_subtree(child, trail, index, policy)?;
    }
    trail.pop();
    Ok(())
}
