//! Error types for the hierarchy service
//!
//! Covers:
//! - Collaborator fetch failures (I/O, unavailable endpoint)
//! - Malformed payloads
//! - Snapshot validation failures
//! - Configuration errors

use org_hierarchy::HierarchyError;
use std::path::PathBuf;

/// Errors raised by a [`HierarchySource`](crate::HierarchySource)
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Reading the payload failed
    #[error("failed to read hierarchy from {}: {source}", .path.display())]
    Io {
        /// Where the payload was expected
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Payload is not a valid office list
    #[error("malformed hierarchy payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The endpoint could not be reached or answered with an error
    #[error("hierarchy source unavailable: {0}")]
    Unavailable(String),
}

/// Main service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Fetching the payload failed
    #[error("hierarchy load failed: {0}")]
    Source(#[from] SourceError),

    /// Payload fetched but could not be turned into a snapshot
    #[error("invalid hierarchy: {0}")]
    Hierarchy(#[from] HierarchyError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Whether a user-triggered reload could plausibly succeed
    ///
    /// Nothing retries automatically; this only informs the caller.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Source(SourceError::Io { .. } | SourceError::Unavailable(_))
        )
    }
}
