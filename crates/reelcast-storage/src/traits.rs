//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. From the caller's perspective every put is all-or-nothing:
//! on success the asset is durably retrievable at `public_url(key)`, on
//! failure nothing may reference the key.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends: S3 (published videos) and the local asset directory
/// (published thumbnails). The publishers work against this trait so they
/// can be tested with an in-memory fake.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload bytes under `key` with the given content type.
    /// Returns the public URL of the stored asset.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<String>;

    /// Upload a local file under `key` with the given content type,
    /// streaming it rather than buffering it whole.
    /// Returns the public URL of the stored asset.
    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<String>;

    /// Delete the asset stored under `key`. Deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an asset exists under `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Public URL an asset stored under `key` is (or would be) served from.
    fn public_url(&self, key: &str) -> String;
}

/// Reject keys that could escape the backend's root.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key.contains("..") || key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_rejects_traversal() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("/etc/passwd").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("landscape/abc.mp4").is_ok());
    }
}
