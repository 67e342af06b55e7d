//! Service configuration
//!
//! Defaults cover the usual dashboard setup; a TOML document may override
//! any subset of keys.

use crate::error::ServiceError;
use org_hierarchy::DuplicateIdPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hierarchy service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Quiet period before a typed query runs, in milliseconds
    pub search_debounce_ms: u64,
    /// Handling of ids that occur twice in one payload
    pub duplicate_ids: DuplicateIdPolicy,
    /// Buffered notifications per subscriber before old ones are dropped
    pub notification_capacity: usize,
}

impl ServiceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; absent keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ServiceError::Config`] on invalid TOML or a zero
    /// notification capacity.
    pub fn from_toml_str(document: &str) -> Result<Self, ServiceError> {
        let config: Self =
            toml::from_str(document).map_err(|e| ServiceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde alone cannot reject
    ///
    /// # Errors
    /// Returns [`ServiceError::Config`] when `notification_capacity` is zero.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.notification_capacity == 0 {
            return Err(ServiceError::Config(
                "notification_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// With search debounce period
    #[inline]
    #[must_use]
    pub fn with_search_debounce(mut self, quiet: Duration) -> Self {
        self.search_debounce_ms = u64::try_from(quiet.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With duplicate id policy
    #[inline]
    #[must_use]
    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    /// With notification buffer size
    #[inline]
    #[must_use]
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    /// Search debounce as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            duplicate_ids: DuplicateIdPolicy::Reject,
            notification_capacity: 16,
        }
    }
}
