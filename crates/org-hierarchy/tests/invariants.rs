use org_hierarchy::prelude::*;
use org_hierarchy::{path_ids, stats_for, transform};
use org_test_utils::arb_offices;
use proptest::prelude::*;
use std::sync::Arc;

fn check_levels(node: &Node, expected: usize) {
    assert_eq!(node.level(), expected, "level of {}", node.id());
    assert_eq!(node.has_children(), !node.children().is_empty());
    for child in node.children() {
        check_levels(child, expected + 1);
    }
}

proptest! {
    #[test]
    fn prop_levels_and_has_children(raw in arb_offices()) {
        let forest = transform(&raw);
        prop_assert_eq!(forest.len(), raw.len());
        for root in &forest {
            check_levels(root, 0);
        }
    }

    #[test]
    fn prop_expand_all_collapse_all_complement(raw in arb_offices()) {
        let hierarchy = Hierarchy::from_raw(&raw, DuplicateIdPolicy::Reject).unwrap();
        let store = ExpansionStore::new();

        store.expand_all(hierarchy.roots());
        let expected: ExpansionSet = hierarchy
            .iter()
            .filter(|n| n.has_children())
            .map(|n| n.id().clone())
            .collect();
        prop_assert_eq!(store.current(), expected);

        store.collapse_all();
        prop_assert!(store.current().is_empty());
    }

    #[test]
    fn prop_search_substring_law(raw in arb_offices(), query in "[a-z]{1,3}") {
        let hierarchy = Hierarchy::from_raw(&raw, DuplicateIdPolicy::Reject).unwrap();
        let results = hierarchy.search(&query);

        for result in &results {
            for field in &result.matches {
                let value = match field {
                    MatchField::Name => result.node.name(),
                    MatchField::Email => result.node.email().unwrap(),
                    MatchField::Country => result.node.country().unwrap(),
                };
                prop_assert!(value.to_lowercase().contains(&query));
            }
            prop_assert_eq!(result.ancestor_ids.as_slice(), hierarchy.ancestors(result.node.id()));
        }

        let hits: Vec<&NodeId> = results.iter().map(|r| r.node.id()).collect();
        for node in hierarchy.iter() {
            if node.name().to_lowercase().contains(&query) {
                prop_assert!(hits.contains(&node.id()));
            }
        }
    }

    #[test]
    fn prop_ancestor_index_agrees_with_walk(raw in arb_offices()) {
        let hierarchy = Hierarchy::from_raw(&raw, DuplicateIdPolicy::Reject).unwrap();
        for node in hierarchy.iter() {
            let walked = path_ids(hierarchy.roots(), node.id());
            prop_assert_eq!(hierarchy.ancestors(node.id()), walked.as_slice());
            prop_assert_eq!(walked.len(), node.level());
        }
    }

    #[test]
    fn prop_stats_additive(raw in arb_offices()) {
        let forest: Vec<Arc<Node>> = transform(&raw);
        for root in &forest {
            for node in root.iter() {
                let stats = stats_for(node);
                prop_assert_eq!(stats.total, stats.active + stats.inactive);

                let from_children = node
                    .children()
                    .iter()
                    .map(|c| {
                        let own = usize::from(c.node_type() == NodeType::Member);
                        own + stats_for(c).total
                    })
                    .sum::<usize>();
                prop_assert_eq!(stats.total, from_children);
            }
        }
    }
}
