//! Normalized tree nodes
//!
//! Provides [`Node`], the uniform shape every hierarchy level is projected
//! into, together with its variant payload [`NodeKind`] and the static
//! presentation lookups keyed on node type and member role.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Stable node identity
///
/// Equals the source entity's identifier (office id, brand id, ..., member
/// user id). Unique within a single [`Hierarchy`](crate::Hierarchy) snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any string-like value
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hierarchy level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Top-level office
    Office,
    /// Brand within an office
    Brand,
    /// Desk within a brand
    Desk,
    /// Team within a desk
    Team,
    /// Team member (always a leaf)
    Member,
}

impl NodeType {
    /// Lowercase tag as used on the presentation side
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Brand => "brand",
            Self::Desk => "desk",
            Self::Team => "team",
            Self::Member => "member",
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload
///
/// Fields only exist on the variants they belong to, so an office can never
/// carry an email and a member can never carry a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeKind {
    /// Office payload
    Office {
        /// Office country
        country: String,
    },
    /// Brand payload
    Brand {
        /// Brand country
        country: String,
    },
    /// Desk payload
    #[serde(rename_all = "camelCase")]
    Desk {
        /// Desk subtype code (e.g. sales, retention)
        desk_subtype: String,
        /// Working language
        language: String,
    },
    /// Teams carry no payload
    Team,
    /// Member payload
    #[serde(rename_all = "camelCase")]
    Member {
        /// Contact email
        email: String,
        /// Role code, see [`role_display_name`]
        role: String,
        /// Date the member was assigned to the team
        assigned_date: String,
    },
}

impl NodeKind {
    /// Type tag of this payload
    #[must_use]
    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::Office { .. } => NodeType::Office,
            Self::Brand { .. } => NodeType::Brand,
            Self::Desk { .. } => NodeType::Desk,
            Self::Team => NodeType::Team,
            Self::Member { .. } => NodeType::Member,
        }
    }
}

/// One normalized hierarchy entity
///
/// Built once by [`transform`](crate::transform) and never mutated. Children
/// are owned exclusively by their parent; the `Arc` only lets snapshots and
/// search results share subtrees without copying them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) is_active: bool,
    pub(crate) level: usize,
    pub(crate) has_children: bool,
    #[serde(flatten)]
    pub(crate) kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<Arc<Node>>,
}

impl Node {
    /// Assemble a node; `has_children` is derived from `children`
    #[must_use]
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        is_active: bool,
        level: usize,
        kind: NodeKind,
        children: Vec<Arc<Node>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active,
            level,
            has_children: !children.is_empty(),
            kind,
            children,
        }
    }

    /// Node identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Active flag (always true for members)
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Depth, 0 for offices
    #[inline]
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether the node had children at transform time
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    /// Direct children in source order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Arc<Node>] {
        &self.children
    }

    /// Variant payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Type tag
    #[inline]
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// Member email, if this is a member
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Member { email, .. } => Some(email),
            _ => None,
        }
    }

    /// Country, if this is an office or brand
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Office { country } | NodeKind::Brand { country } => Some(country),
            _ => None,
        }
    }

    /// Pre-order iterator over this node and all of its descendants
    #[must_use]
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order traversal over a forest
///
/// Yields nodes in the order a fully expanded tree view lists them.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    /// Traverse every root of `forest` in order
    #[must_use]
    pub fn forest(forest: &'a [Arc<Node>]) -> Self {
        Self {
            stack: forest.iter().rev().map(|n| n.as_ref()).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| c.as_ref()));
        Some(node)
    }
}

/// Human-readable label for a member role code
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn role_display_name(role: &str) -> &str {
    match role {
        "admin" => "Administrator",
        "manager" => "Manager",
        "team_leader" => "Team Leader",
        "agent" => "Agent",
        "retention" => "Retention Agent",
        other => other,
    }
}

/// Icon name for a node type
#[must_use]
pub const fn node_icon(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Office => "business",
        NodeType::Brand => "branding_watermark",
        NodeType::Desk => "desk",
        NodeType::Team => "groups",
        NodeType::Member => "person",
    }
}
