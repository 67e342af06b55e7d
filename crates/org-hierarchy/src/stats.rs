//! Member head-counts per subtree

use crate::node::{Node, NodeType};
use serde::Serialize;
use std::ops::Add;

/// Member counts below a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemberStats {
    /// All members
    pub total: usize,
    /// Members whose node is active
    pub active: usize,
    /// Members whose node is inactive
    pub inactive: usize,
}

impl Add for MemberStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total: self.total + rhs.total,
            active: self.active + rhs.active,
            inactive: self.inactive + rhs.inactive,
        }
    }
}

/// Count member descendants of `node`
///
/// The node itself is not counted, so a member or any other leaf yields
/// all zeros.
#[must_use]
pub fn stats_for(node: &Node) -> MemberStats {
    node.children()
        .iter()
        .map(|child| count_self(child) + stats_for(child))
        .fold(MemberStats::default(), Add::add)
}

fn count_self(node: &Node) -> MemberStats {
    match (node.node_type(), node.is_active()) {
        (NodeType::Member, true) => MemberStats {
            total: 1,
            active: 1,
            inactive: 0,
        },
        (NodeType::Member, false) => MemberStats {
            total: 1,
            active: 0,
            inactive: 1,
        },
        _ => MemberStats::default(),
    }
}
