//! Org Hierarchy Service
//!
//! The orchestration layer around the hierarchy engine:
//! - Fetches the nested payload through a [`HierarchySource`]
//! - Publishes tree snapshots and expansion state to subscribers
//! - Runs search with automatic ancestor expansion
//! - Debounces search input
//! - Reports load failures as notifications
//!
//! # Example
//!
//! ```rust
//! use org_service::{HierarchyService, ServiceConfig, StaticSource};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), org_service::ServiceError> {
//! let source = Arc::new(StaticSource::new(vec![]));
//! let service = HierarchyService::new(source, ServiceConfig::new())?;
//!
//! service.load_hierarchy().await?;
//! let outcome = service.search_and_expand("jane");
//! println!("{} matches", outcome.results.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod config;
pub mod debounce;
pub mod error;
pub mod service;
pub mod source;

// Re-exports for convenience
pub use config::ServiceConfig;
pub use debounce::SearchDebouncer;
pub use error::{ServiceError, SourceError};
pub use service::{HierarchyService, Notification, SearchOutcome};
pub use source::{parse_payload, HierarchySource, JsonFileSource, StaticSource};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the hierarchy service
    pub use crate::{
        HierarchyService, HierarchySource, Notification, SearchDebouncer, SearchOutcome,
        ServiceConfig, ServiceError,
    };
    pub use org_hierarchy::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
