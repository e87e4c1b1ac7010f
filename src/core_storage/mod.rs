// Object storage seen by the FTP engine: one flat bucket, no directories.

pub mod auth;
pub mod error;
pub mod kodo;
#[cfg(test)]
pub mod memory;

pub use error::StorageError;
pub use kodo::KodoBackend;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use url::Url;

/// A single object of the bucket, as shown by LIST and SIZE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Operations the session engine needs from the storage service.
///
/// Every key is a flat object name inside the configured bucket.
#[async_trait]
pub trait StorageBackend: Send + Sync + Debug {
    /// Lists at most `limit` objects, in the order the service returns them.
    async fn list(&self, limit: usize) -> Result<Vec<DirectoryEntry>, StorageError>;

    /// Returns the entry for `key`, or `StorageError::NotFound`.
    async fn stat(&self, key: &str) -> Result<DirectoryEntry, StorageError>;

    /// Stores `data` under `key`, replacing any existing object.
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Moves the object `from` to `to` inside the bucket.
    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError>;

    /// Builds a time-limited URL that serves the object's bytes to a plain GET.
    fn fetch_url(&self, key: &str) -> Result<Url, StorageError>;
}
