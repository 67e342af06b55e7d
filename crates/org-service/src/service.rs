//! Hierarchy service
//!
//! The orchestration layer between a [`HierarchySource`] and the
//! presentation side:
//! - Loads and replaces the tree snapshot
//! - Owns the expansion store
//! - Runs search with automatic ancestor expansion
//! - Surfaces load failures as notifications

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::source::HierarchySource;
use org_hierarchy::{
    node_icon, role_display_name, ExpansionSet, ExpansionStore, Hierarchy, MemberStats, NodeId,
    NodeType, SearchResult,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// User-visible events emitted by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    /// A load failed; the previous tree is still shown
    LoadFailed {
        /// Human-readable reason
        message: String,
    },
}

/// Result of a search that also revealed every match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// The query as submitted
    pub query: String,
    /// Matches in pre-order
    pub results: Vec<SearchResult>,
    /// Union of all ancestor ids of all matches, sorted
    pub expanded_node_ids: Vec<NodeId>,
}

/// Shared handle onto the hierarchy state
///
/// Clones are cheap and observe the same tree, expansion set and
/// notification stream.
#[derive(Clone)]
pub struct HierarchyService {
    source: Arc<dyn HierarchySource>,
    config: Arc<ServiceConfig>,
    tree: Arc<watch::Sender<Arc<Hierarchy>>>,
    expansion: ExpansionStore,
    notifications: broadcast::Sender<Notification>,
}

impl std::fmt::Debug for HierarchyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchyService")
            .field("config", &self.config)
            .field("nodes", &self.tree.borrow().len())
            .field("expanded", &self.expansion.current().len())
            .finish_non_exhaustive()
    }
}

impl HierarchyService {
    /// Create a service with an empty tree and nothing expanded
    ///
    /// # Errors
    /// Returns [`ServiceError::Config`] if `config` is invalid.
    pub fn new(
        source: Arc<dyn HierarchySource>,
        config: ServiceConfig,
    ) -> Result<Self, ServiceError> {
        config.validate()?;
        let (tree, _) = watch::channel(Arc::new(Hierarchy::empty()));
        let (notifications, _) = broadcast::channel(config.notification_capacity);
        Ok(Self {
            source,
            config: Arc::new(config),
            tree: Arc::new(tree),
            expansion: ExpansionStore::new(),
            notifications,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The expansion store this service writes to
    #[inline]
    #[must_use]
    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    /// Current tree snapshot
    #[must_use]
    pub fn hierarchy(&self) -> Arc<Hierarchy> {
        Arc::clone(&self.tree.borrow())
    }

    /// Subscribe to the current tree and every replacement
    #[must_use]
    pub fn subscribe_tree(&self) -> watch::Receiver<Arc<Hierarchy>> {
        self.tree.subscribe()
    }

    /// Subscribe to the current expansion set and every change
    #[must_use]
    pub fn subscribe_expansion(&self) -> watch::Receiver<ExpansionSet> {
        self.expansion.subscribe()
    }

    /// Subscribe to notifications emitted from now on
    #[must_use]
    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Fetch, transform and publish a fresh tree
    ///
    /// Either the whole tree is replaced or nothing changes. On failure one
    /// [`Notification::LoadFailed`] is emitted, the previous snapshot stays
    /// in place and the expansion set is not touched. Concurrent loads are
    /// not coalesced: whichever finishes last wins.
    ///
    /// # Errors
    /// Returns the fetch or snapshot error that aborted the load.
    pub async fn load_hierarchy(&self) -> Result<Arc<Hierarchy>, ServiceError> {
        tracing::info!("loading hierarchy");

        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                tracing::info!(
                    roots = snapshot.roots().len(),
                    nodes = snapshot.len(),
                    "hierarchy loaded"
                );
                self.tree.send_replace(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "hierarchy load failed");
                // No subscribers is not an error
                let _ = self.notifications.send(Notification::LoadFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<Hierarchy, ServiceError> {
        let raw = self.source.fetch().await?;
        Ok(Hierarchy::from_raw(&raw, self.config.duplicate_ids)?)
    }

    /// Ancestor ids of `id`, root first; empty for roots and unknown ids
    #[must_use]
    pub fn path_ids(&self, id: &NodeId) -> Vec<NodeId> {
        self.hierarchy().ancestors(id).to_vec()
    }

    /// Search the current tree without touching expansion state
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.hierarchy().search(query)
    }

    /// Search, then expand every ancestor of every match
    ///
    /// The merge is additive: nodes expanded earlier stay expanded, and a
    /// blank query expands nothing and collapses nothing.
    pub fn search_and_expand(&self, query: &str) -> SearchOutcome {
        let hierarchy = self.hierarchy();
        let results = hierarchy.search(query);

        let expanded: BTreeSet<NodeId> = results
            .iter()
            .flat_map(|r| r.ancestor_ids.iter().cloned())
            .collect();
        let expanded_node_ids: Vec<NodeId> = expanded.into_iter().collect();

        tracing::debug!(
            query,
            matches = results.len(),
            revealed = expanded_node_ids.len(),
            "search and expand"
        );
        if !expanded_node_ids.is_empty() {
            self.expansion.merge(expanded_node_ids.iter().cloned());
        }

        SearchOutcome {
            query: query.to_string(),
            results,
            expanded_node_ids,
        }
    }

    /// Member counts under `id`
    #[must_use]
    pub fn stats_for(&self, id: &NodeId) -> MemberStats {
        self.hierarchy().stats_for(id)
    }

    /// Ids of every node that has children
    #[must_use]
    pub fn get_all_node_ids(&self) -> Vec<NodeId> {
        self.hierarchy().all_expandable_ids()
    }

    /// Label for a member role code
    #[must_use]
    pub fn role_display_name<'a>(&self, role: &'a str) -> &'a str {
        role_display_name(role)
    }

    /// Icon name for a node type
    #[must_use]
    pub fn node_icon(&self, node_type: NodeType) -> &'static str {
        node_icon(node_type)
    }

    /// Flip the expansion of `id`
    pub fn toggle_node(&self, id: &NodeId) {
        self.expansion.toggle(id);
    }

    /// Expand `id`
    pub fn expand_node(&self, id: &NodeId) {
        self.expansion.expand(id);
    }

    /// Collapse `id`
    pub fn collapse_node(&self, id: &NodeId) {
        self.expansion.collapse(id);
    }

    /// Expand exactly the nodes of the current tree that have children
    pub fn expand_all(&self) {
        self.expansion.expand_all(self.hierarchy().roots());
    }

    /// Collapse everything
    pub fn collapse_all(&self) {
        self.expansion.collapse_all();
    }
}
