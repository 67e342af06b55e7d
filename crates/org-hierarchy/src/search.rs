//! Variant-aware text search
//!
//! Every node is matched on its name; members additionally on email, offices
//! and brands additionally on country. Matching is a case-insensitive
//! substring test.

use crate::node::{Node, NodeId, NodeKind};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Attribute that satisfied a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    /// Display name
    Name,
    /// Member email
    Email,
    /// Office or brand country
    Country,
}

impl Display for MatchField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Country => "country",
        })
    }
}

/// One matching node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The matched node (shared with the tree)
    pub node: Arc<Node>,
    /// Display names from the root down to the node, inclusive
    pub path: Vec<String>,
    /// Which attributes matched, in name/email/country order
    pub matches: Vec<MatchField>,
    /// Ids above this occurrence of the node, root first
    pub ancestor_ids: Vec<NodeId>,
}

/// Search the forest in pre-order
///
/// A blank query means no search is active and yields nothing.
#[must_use]
pub fn search(forest: &[Arc<Node>], query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut trail = Trail::default();
    for root in forest {
        collect(root, &needle, &mut trail, &mut results);
    }
    results
}

/// Fields of `node` that contain the lowercase `needle`
#[must_use]
pub fn matching_fields(node: &Node, needle: &str) -> Vec<MatchField> {
    let hit = |value: &str| value.to_lowercase().contains(needle);

    let mut matches = Vec::new();
    if hit(node.name()) {
        matches.push(MatchField::Name);
    }
    match node.kind() {
        NodeKind::Member { email, .. } if hit(email) => matches.push(MatchField::Email),
        NodeKind::Office { country } | NodeKind::Brand { country } if hit(country) => {
            matches.push(MatchField::Country);
        }
        _ => {}
    }
    matches
}

/// Names and ids of the nodes above the current one
#[derive(Default)]
struct Trail {
    names: Vec<String>,
    ids: Vec<NodeId>,
}

fn collect(node: &Arc<Node>, needle: &str, trail: &mut Trail, results: &mut Vec<SearchResult>) {
    trail.names.push(node.name().to_string());

    let matches = matching_fields(node, needle);
    if !matches.is_empty() {
        results.push(SearchResult {
            node: Arc::clone(node),
            path: trail.names.clone(),
            matches,
            ancestor_ids: trail.ids.clone(),
        });
    }

    trail.ids.push(node.id().clone());
    for child in node.children() {
        collect(child, needle, trail, results);
    }
    trail.ids.pop();
    trail.names.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn member(id: &str, name: &str, email: &str) -> Arc<Node> {
        Arc::new(Node::new(
            id,
            name,
            true,
            2,
            NodeKind::Member {
                email: email.into(),
                role: "agent".into(),
                assigned_date: "2024-01-01".into(),
            },
            vec![],
        ))
    }

    fn forest() -> Vec<Arc<Node>> {
        let team = Arc::new(Node::new(
            "t1",
            "Alpha",
            true,
            1,
            NodeKind::Team,
            vec![
                member("m1", "Jane Doe", "jane@x.com"),
                member("m2", "Cyprian Stone", "c.stone@corp.io"),
            ],
        ));
        vec![Arc::new(Node::new(
            "o1",
            "Limassol HQ",
            true,
            0,
            NodeKind::Office {
                country: "Cyprus".into(),
            },
            vec![team],
        ))]
    }

    fn result_ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.node.id().as_str()).collect()
    }

    #[test]
    fn blank_query_yields_nothing() {
        assert!(search(&forest(), "").is_empty());
        assert!(search(&forest(), "   \t").is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let results = search(&forest(), "JANE");
        assert_eq!(result_ids(&results), vec!["m1"]);
        // "jane" is also in the email, so both fields are reported
        assert_eq!(results[0].matches, vec![MatchField::Name, MatchField::Email]);
        assert_eq!(results[0].path, vec!["Limassol HQ", "Alpha", "Jane Doe"]);
    }

    #[test]
    fn results_carry_their_own_ancestor_ids() {
        let shared = || {
            Arc::new(Node::new(
                "x",
                "Shared",
                true,
                1,
                NodeKind::Brand {
                    country: "CY".into(),
                },
                vec![],
            ))
        };
        let office = |id: &str, name: &str| {
            Arc::new(Node::new(
                id,
                name,
                true,
                0,
                NodeKind::Office {
                    country: "CY".into(),
                },
                vec![shared()],
            ))
        };
        let forest = vec![office("o1", "Acme"), office("o2", "Globex")];

        let results = search(&forest, "shared");
        let ancestors: Vec<Vec<NodeId>> = results.iter().map(|r| r.ancestor_ids.clone()).collect();
        assert_eq!(ancestors, vec![vec![NodeId::new("o1")], vec![NodeId::new("o2")]]);

        let root = search(&forest, "globex");
        assert!(root[0].ancestor_ids.is_empty());
    }

    #[test]
    fn email_only_match() {
        let results = search(&forest(), "x.com");
        assert_eq!(result_ids(&results), vec!["m1"]);
        assert_eq!(results[0].matches, vec![MatchField::Email]);
    }

    #[test]
    fn country_and_name_in_pre_order() {
        let results = search(&forest(), "cyp");
        assert_eq!(result_ids(&results), vec!["o1", "m2"]);
        assert_eq!(results[0].matches, vec![MatchField::Country]);
        assert_eq!(results[1].matches, vec![MatchField::Name]);
    }

    #[test]
    fn multiple_fields_in_one_result() {
        let results = search(&forest(), "stone");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matches, vec![MatchField::Name, MatchField::Email]);
    }

    #[test]
    fn team_has_no_secondary_field() {
        assert!(search(&forest(), "zzz").is_empty());
        let results = search(&forest(), "alp");
        assert_eq!(result_ids(&results), vec!["t1"]);
    }
}
