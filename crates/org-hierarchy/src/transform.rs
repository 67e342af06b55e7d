//! Raw payload to normalized tree
//!
//! Each mapper is a plain projection of one wire record into a [`Node`],
//! recursing into the next level with `level + 1`. Input order is kept.

use crate::node::{Node, NodeKind};
use crate::raw::{RawBrand, RawDesk, RawMember, RawOffice, RawTeam};
use std::sync::Arc;

/// Build the normalized forest from the endpoint payload
///
/// Offices become level-0 roots.
#[must_use]
pub fn transform(raw: &[RawOffice]) -> Vec<Arc<Node>> {
    raw.iter().map(|office| Arc::new(office_to_node(office, 0))).collect()
}

/// Project an office and its subtree
#[must_use]
pub fn office_to_node(office: &RawOffice, level: usize) -> Node {
    let children = office
        .brands
        .iter()
        .map(|brand| Arc::new(brand_to_node(brand, level + 1)))
        .collect();

    Node::new(
        office.id.clone(),
        office.name.clone(),
        office.is_active,
        level,
        NodeKind::Office {
            country: office.country.clone(),
        },
        children,
    )
}

/// Project a brand and its subtree
#[must_use]
pub fn brand_to_node(brand: &RawBrand, level: usize) -> Node {
    let children = brand
        .desks
        .iter()
        .map(|desk| Arc::new(desk_to_node(desk, level + 1)))
        .collect();

    Node::new(
        brand.id.clone(),
        brand.name.clone(),
        brand.is_active,
        level,
        NodeKind::Brand {
            country: brand.country.clone(),
        },
        children,
    )
}

/// Project a desk and its subtree
#[must_use]
pub fn desk_to_node(desk: &RawDesk, level: usize) -> Node {
    let children = desk
        .teams
        .iter()
        .map(|team| Arc::new(team_to_node(team, level + 1)))
        .collect();

    Node::new(
        desk.id.clone(),
        desk.name.clone(),
        desk.is_active,
        level,
        NodeKind::Desk {
            desk_subtype: desk.desk_subtype.clone(),
            language: desk.language.clone(),
        },
        children,
    )
}

/// Project a team and its members
#[must_use]
pub fn team_to_node(team: &RawTeam, level: usize) -> Node {
    let children = team
        .members
        .iter()
        .map(|member| Arc::new(member_to_node(member, level + 1)))
        .collect();

    Node::new(
        team.id.clone(),
        team.name.clone(),
        team.is_active,
        level,
        NodeKind::Team,
        children,
    )
}

/// Project a member; members are always active leaves
#[must_use]
pub fn member_to_node(member: &RawMember, level: usize) -> Node {
    Node::new(
        member.user_id.clone(),
        member.full_name.clone(),
        true,
        level,
        NodeKind::Member {
            email: member.email.clone(),
            role: member.role.clone(),
            assigned_date: member.assigned_date.clone(),
        },
        Vec::new(),
    )
}
