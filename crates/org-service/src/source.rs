//! Hierarchy fetch collaborators
//!
//! The engine never talks to the network itself. It asks a
//! [`HierarchySource`] for the complete office list in one call.

use crate::error::SourceError;
use async_trait::async_trait;
use org_hierarchy::RawOffice;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

/// One-shot provider of the full nested hierarchy
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HierarchySource: Send + Sync {
    /// Fetch every office with all nested levels
    async fn fetch(&self) -> Result<Vec<RawOffice>, SourceError>;
}

/// Parse an endpoint response body
///
/// # Errors
/// Returns [`SourceError::Malformed`] when the body is not an office list,
/// including when any level lacks its child array.
pub fn parse_payload(body: &[u8]) -> Result<Vec<RawOffice>, SourceError> {
    Ok(serde_json::from_slice(body)?)
}

/// In-memory source; the held payload can be swapped between loads
#[derive(Debug, Default)]
pub struct StaticSource {
    offices: RwLock<Vec<RawOffice>>,
}

impl StaticSource {
    /// Create source serving `offices`
    #[must_use]
    pub fn new(offices: Vec<RawOffice>) -> Self {
        Self {
            offices: RwLock::new(offices),
        }
    }

    /// Serve `offices` from the next fetch on
    pub fn replace(&self, offices: Vec<RawOffice>) {
        *self.offices.write() = offices;
    }
}

#[async_trait]
impl HierarchySource for StaticSource {
    async fn fetch(&self) -> Result<Vec<RawOffice>, SourceError> {
        Ok(self.offices.read().clone())
    }
}

/// Reads the payload from a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create source reading from `path` on every fetch
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HierarchySource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawOffice>, SourceError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_payload(&body)
    }
}
