//! Expansion state
//!
//! Which nodes a tree view shows open, kept apart from the tree itself so it
//! survives reloads. [`ExpansionStore`] publishes every change through a
//! `tokio::sync::watch` channel: new subscribers see the current set
//! immediately and every later replacement.

use crate::node::{Node, NodeId, PreOrder};
use im::OrdSet;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable set of expanded node ids
///
/// Backed by a persistent ordered set, so cloning is cheap and every
/// mutation produces a new value rather than editing a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(OrdSet<NodeId>);

impl ExpansionSet {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains(id)
    }

    /// Number of expanded ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is expanded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.0.iter()
    }

    /// Copy with `id` added
    #[must_use]
    pub fn with(&self, id: NodeId) -> Self {
        Self(self.0.update(id))
    }

    /// Copy with `id` removed
    #[must_use]
    pub fn without(&self, id: &NodeId) -> Self {
        Self(self.0.without(id))
    }

    /// Copy with every id in `ids` added
    #[must_use]
    pub fn union(&self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = self.0.clone();
        set.extend(ids);
        Self(set)
    }
}

impl FromIterator<NodeId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ExpansionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Ids of every node with at least one child, in pre-order
#[must_use]
pub fn expandable_ids(forest: &[Arc<Node>]) -> Vec<NodeId> {
    PreOrder::forest(forest)
        .filter(|node| node.has_children())
        .map(|node| node.id().clone())
        .collect()
}

/// Shared, observable expansion state
///
/// Cloning the store yields another handle onto the same state.
#[derive(Debug, Clone)]
pub struct ExpansionStore {
    tx: Arc<watch::Sender<ExpansionSet>>,
}

impl ExpansionStore {
    /// Create a store with nothing expanded
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ExpansionSet::new());
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the current set and all later changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ExpansionSet> {
        self.tx.subscribe()
    }

    /// Snapshot of the current set
    #[must_use]
    pub fn current(&self) -> ExpansionSet {
        self.tx.borrow().clone()
    }

    /// Whether `id` is currently expanded
    #[must_use]
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.tx.borrow().contains(id)
    }

    /// Flip membership of `id`
    pub fn toggle(&self, id: &NodeId) {
        self.tx.send_modify(|set| {
            *set = if set.contains(id) {
                set.without(id)
            } else {
                set.with(id.clone())
            };
        });
    }

    /// Add `id`; no effect on content if already expanded
    pub fn expand(&self, id: &NodeId) {
        self.tx.send_modify(|set| *set = set.with(id.clone()));
    }

    /// Remove `id`; no effect on content if not expanded
    pub fn collapse(&self, id: &NodeId) {
        self.tx.send_modify(|set| *set = set.without(id));
    }

    /// Replace the set with every expandable node of `forest`
    pub fn expand_all(&self, forest: &[Arc<Node>]) {
        let all: ExpansionSet = expandable_ids(forest).into_iter().collect();
        tracing::debug!(expanded = all.len(), "expand all");
        self.tx.send_replace(all);
    }

    /// Replace the set with an empty one
    pub fn collapse_all(&self) {
        tracing::debug!("collapse all");
        self.tx.send_replace(ExpansionSet::new());
    }

    /// Add every id in `ids`, keeping what is already expanded
    pub fn merge(&self, ids: impl IntoIterator<Item = NodeId>) {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        self.tx.send_modify(|set| *set = set.union(ids));
    }
}

impl Default for ExpansionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn forest() -> Vec<Arc<Node>> {
        let empty_team = Arc::new(Node::new("t2", "Empty", true, 1, NodeKind::Team, vec![]));
        let member = Arc::new(Node::new(
            "m1",
            "Jane",
            true,
            2,
            NodeKind::Member {
                email: String::new(),
                role: String::new(),
                assigned_date: String::new(),
            },
            vec![],
        ));
        let team = Arc::new(Node::new("t1", "Alpha", true, 1, NodeKind::Team, vec![member]));
        vec![Arc::new(Node::new(
            "d1",
            "Sales",
            true,
            0,
            NodeKind::Desk {
                desk_subtype: String::new(),
                language: String::new(),
            },
            vec![team, empty_team],
        ))]
    }

    #[test]
    fn toggle_flips_membership() {
        let store = ExpansionStore::new();
        store.toggle(&id("a"));
        assert!(store.is_expanded(&id("a")));
        store.toggle(&id("a"));
        assert!(!store.is_expanded(&id("a")));
    }

    #[test]
    fn expand_and_collapse_are_idempotent() {
        let store = ExpansionStore::new();
        store.expand(&id("a"));
        let once = store.current();
        store.expand(&id("a"));
        assert_eq!(store.current(), once);

        store.collapse(&id("missing"));
        assert_eq!(store.current(), once);

        store.collapse(&id("a"));
        assert!(store.current().is_empty());
    }

    #[test]
    fn expand_all_replaces_with_expandable_nodes() {
        let store = ExpansionStore::new();
        store.expand(&id("stale"));
        store.expand_all(&forest());

        let expected: ExpansionSet = [id("d1"), id("t1")].into_iter().collect();
        assert_eq!(store.current(), expected);

        store.collapse_all();
        assert!(store.current().is_empty());
    }

    #[test]
    fn merge_is_additive() {
        let store = ExpansionStore::new();
        store.expand(&id("keep"));
        store.merge([id("a"), id("b")]);

        let current = store.current();
        assert_eq!(current.len(), 3);
        assert!(current.contains(&id("keep")));
    }

    #[test]
    fn subscribers_replay_latest_and_see_changes() {
        let store = ExpansionStore::new();
        store.expand(&id("a"));

        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().contains(&id("a")));
        assert!(!rx.has_changed().unwrap());

        store.expand(&id("b"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 2);

        let late = store.subscribe();
        assert_eq!(late.borrow().len(), 2);
    }

    #[test]
    fn clones_share_state() {
        let store = ExpansionStore::new();
        let other = store.clone();
        other.expand(&id("a"));
        assert!(store.is_expanded(&id("a")));
    }

    #[test]
    fn expansion_set_serializes_as_sorted_list() {
        let set: ExpansionSet = [id("b"), id("a")].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a","b"]"#);
    }
}
