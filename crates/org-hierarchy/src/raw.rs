//! Wire shapes returned by the hierarchy endpoint
//!
//! One struct per level, each nesting the next. Child arrays are required:
//! a payload missing one fails to deserialize rather than producing a
//! partial tree.

use crate::node::NodeId;
use serde::{Deserialize, Deserializer};

/// Top-level office
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffice {
    /// Office id
    #[serde(deserialize_with = "wire_id")]
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Country name, empty when absent
    #[serde(default)]
    pub country: String,
    /// Whether the office is active
    pub is_active: bool,
    /// Brands run from this office
    pub brands: Vec<RawBrand>,
}

/// Brand within an office
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBrand {
    /// Brand id
    #[serde(deserialize_with = "wire_id")]
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Country name, empty when absent
    #[serde(default)]
    pub country: String,
    /// Whether the brand is active
    pub is_active: bool,
    /// Desks under this brand
    pub desks: Vec<RawDesk>,
}

/// Desk within a brand
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDesk {
    /// Desk id
    #[serde(deserialize_with = "wire_id")]
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Desk subtype code, e.g. `sales`
    #[serde(default)]
    pub desk_subtype: String,
    /// Working language
    #[serde(default)]
    pub language: String,
    /// Whether the desk is active
    pub is_active: bool,
    /// Teams on this desk
    pub teams: Vec<RawTeam>,
}

/// Team within a desk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    /// Team id
    #[serde(deserialize_with = "wire_id")]
    pub id: NodeId,
    /// Display name
    pub name: String,
    /// Whether the team is active
    pub is_active: bool,
    /// Members assigned to this team
    pub members: Vec<RawMember>,
}

/// Team member; carries no active flag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    /// User id, used as the node id
    #[serde(deserialize_with = "wire_id")]
    pub user_id: NodeId,
    /// Display name
    pub full_name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Role code such as `team_leader`
    #[serde(default)]
    pub role: String,
    /// Date the member joined the team, as sent
    #[serde(default)]
    pub assigned_date: String,
}

/// Identifiers arrive as either JSON strings or integers
fn wire_id<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(s) => NodeId::new(s),
        WireId::Signed(n) => NodeId::new(n.to_string()),
        WireId::Unsigned(n) => NodeId::new(n.to_string()),
    })
}
