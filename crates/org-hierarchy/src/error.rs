//! Error types for hierarchy snapshots

use crate::node::NodeId;

/// Errors raised while assembling a [`Hierarchy`](crate::Hierarchy)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// The same id appears more than once in one tree
    #[error("duplicate node id in hierarchy: {id}")]
    DuplicateNodeId {
        /// The repeated id
        id: NodeId,
    },
}
