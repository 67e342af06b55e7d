use org_hierarchy::prelude::*;
use org_hierarchy::{node_icon, role_display_name, transform};
use org_test_utils::{acme_chain, sample_offices, ACME_CHAIN_JSON};
use pretty_assertions::assert_eq;

fn ids(path: &[NodeId]) -> Vec<&str> {
    path.iter().map(NodeId::as_str).collect()
}

#[test]
fn acme_chain_levels() {
    let forest = transform(&acme_chain());
    let levels: Vec<usize> = forest[0].iter().map(Node::level).collect();
    assert_eq!(levels, vec![0, 1, 2, 3, 4]);
}

#[test]
fn acme_chain_from_json_matches_builders() {
    let raw: Vec<RawOffice> = serde_json::from_str(ACME_CHAIN_JSON).unwrap();
    assert_eq!(raw, acme_chain());
}

#[test]
fn acme_chain_search_fields() {
    let hierarchy = Hierarchy::from_raw(&acme_chain(), DuplicateIdPolicy::Reject).unwrap();

    let by_name = hierarchy.search("jane");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].matches, vec![MatchField::Name, MatchField::Email]);
    assert_eq!(by_name[0].path, vec!["Acme", "AcmeFX", "Sales", "Alpha", "Jane Doe"]);

    let by_email = hierarchy.search("x.com");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].matches, vec![MatchField::Email]);
}

#[test]
fn acme_chain_stats() {
    let hierarchy = Hierarchy::from_raw(&acme_chain(), DuplicateIdPolicy::Reject).unwrap();
    assert_eq!(
        hierarchy.stats_for(&"o1".into()),
        MemberStats {
            total: 1,
            active: 1,
            inactive: 0
        }
    );
    assert_eq!(hierarchy.stats_for(&"m1".into()), MemberStats::default());
}

#[test]
fn auto_reveal_by_hand() {
    let hierarchy = Hierarchy::from_raw(&sample_offices(), DuplicateIdPolicy::Reject).unwrap();
    let store = ExpansionStore::new();

    let results = hierarchy.search("jan");
    let found: Vec<&str> = results.iter().map(|r| r.node.id().as_str()).collect();
    assert_eq!(found, vec!["m1", "m4"]);

    store.merge(results.iter().flat_map(|r| hierarchy.path_ids(r.node.id())));
    let current = store.current();
    let expanded: Vec<&str> = current.iter().map(NodeId::as_str).collect();
    assert_eq!(expanded, vec!["b1", "b3", "d1", "d3", "o1", "o2", "t1", "t4"]);

    let rows = hierarchy.visible_rows(&store.current());
    for result in &results {
        assert!(rows.iter().any(|row| row.node.id() == result.node.id()));
    }
    assert_eq!(ids(hierarchy.ancestors(&"m4".into())), vec!["o2", "b3", "d3", "t4"]);
}

#[test]
fn stats_respect_inactive_flag_only_for_members() {
    let hierarchy = Hierarchy::from_raw(&sample_offices(), DuplicateIdPolicy::Reject).unwrap();
    // Bravo is inactive but its member still counts as active
    let desk = hierarchy.stats_for(&"d1".into());
    assert_eq!(desk.total, 3);
    assert_eq!(desk.active, 3);

    assert_eq!(hierarchy.stats_for(&"b2".into()).total, 0);
    assert_eq!(hierarchy.stats_for(&"o2".into()).total, 2);
}

#[test]
fn presentation_lookups() {
    assert_eq!(node_icon(NodeType::Team), "groups");
    assert_eq!(role_display_name("manager"), "Manager");
}
