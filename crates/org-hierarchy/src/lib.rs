//! Organizational Hierarchy Engine
//!
//! Normalizes the nested office → brand → desk → team → member payload into
//! a uniform tree and answers the questions a tree view asks of it.
//!
//! # Overview
//!
//! - **Node**: polymorphic tree node with a tagged variant payload
//! - **transform**: raw wire payload to normalized forest
//! - **Hierarchy**: immutable snapshot with an id/ancestor index
//! - **ExpansionStore**: observable set of open node ids
//! - **search** / **path_ids** / **stats_for**: read-only queries
//!
//! # Example
//!
//! ```rust
//! use org_hierarchy::{DuplicateIdPolicy, ExpansionStore, Hierarchy, RawOffice};
//!
//! let raw: Vec<RawOffice> = serde_json::from_str(r#"[
//!   {"id": "o1", "name": "Acme", "country": "CY", "isActive": true, "brands": []}
//! ]"#).unwrap();
//!
//! let hierarchy = Hierarchy::from_raw(&raw, DuplicateIdPolicy::Reject).unwrap();
//! let store = ExpansionStore::new();
//! store.expand_all(hierarchy.roots());
//!
//! assert_eq!(hierarchy.search("acme").len(), 1);
//! assert!(store.current().is_empty());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod expansion;
pub mod hierarchy;
pub mod node;
pub mod path;
pub mod raw;
pub mod search;
pub mod stats;
pub mod transform;

// Re-exports
pub use error::HierarchyError;
pub use expansion::{expandable_ids, ExpansionSet, ExpansionStore};
pub use hierarchy::{DuplicateIdPolicy, Hierarchy, VisibleRow};
pub use node::{node_icon, role_display_name, Node, NodeId, NodeKind, NodeType, PreOrder};
pub use path::path_ids;
pub use raw::{RawBrand, RawDesk, RawMember, RawOffice, RawTeam};
pub use search::{matching_fields, search, MatchField, SearchResult};
pub use stats::{stats_for, MemberStats};
pub use transform::transform;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for hierarchy operations
    pub use crate::{
        DuplicateIdPolicy, ExpansionSet, ExpansionStore, Hierarchy, MatchField, MemberStats, Node,
        NodeId, NodeKind, NodeType, RawOffice, SearchResult,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
