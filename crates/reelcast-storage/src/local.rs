use crate::traits::{validate_key, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local asset-directory storage for published thumbnails.
///
/// Files land under `base_path` and are served by the API under
/// `base_url` (e.g. "http://localhost:8091/assets").
#[derive(Clone, Debug)]
pub struct LocalAssetStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalAssetStorage {
    /// Create a new LocalAssetStorage instance, creating `base_path` if it
    /// does not exist yet.
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create asset directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalAssetStorage {
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path with traversal validation.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> StorageResult<()> {
        let mut file = fs::File::create(path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl Storage for LocalAssetStorage {
    async fn put(&self, key: &str, _content_type: &str, data: Bytes) -> StorageResult<String> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();
        self.write_file(&path, &data).await?;

        let url = self.public_url(key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local asset write successful"
        );

        Ok(url)
    }

    async fn put_file(
        &self,
        key: &str,
        _content_type: &str,
        source: &Path,
    ) -> StorageResult<String> {
        let path = self.key_to_path(key)?;

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();
        fs::copy(source, &path).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                path.display(),
                e
            ))
        })?;

        let url = self.public_url(key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local asset copy successful"
        );

        Ok(url)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), key = %key, "Local asset deleted");

        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn test_storage(dir: &Path) -> LocalAssetStorage {
        LocalAssetStorage::new(dir, "http://localhost:8091/assets".to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_put_and_exists() {
        let dir = tempdir().unwrap();
        let storage = test_storage(dir.path()).await;

        let url = storage
            .put("abc.png", "image/png", Bytes::from_static(b"fake png"))
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8091/assets/abc.png");
        assert!(storage.exists("abc.png").await.unwrap());
        assert_eq!(
            std::fs::read(dir.path().join("abc.png")).unwrap(),
            b"fake png"
        );
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = test_storage(dir.path()).await;

        let result = storage
            .put("../escape.png", "image/png", Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.delete("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.exists("../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let dir = tempdir().unwrap();
        let storage = test_storage(dir.path()).await;

        assert!(storage.delete("nonexistent.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_put_file_copies_source() {
        let dir = tempdir().unwrap();
        let storage = test_storage(dir.path()).await;

        let source_dir = tempdir().unwrap();
        let source = source_dir.path().join("source.jpeg");
        std::fs::write(&source, b"fake jpeg").unwrap();

        let url = storage
            .put_file("thumb.jpeg", "image/jpeg", &source)
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8091/assets/thumb.jpeg");
        assert_eq!(
            std::fs::read(dir.path().join("thumb.jpeg")).unwrap(),
            b"fake jpeg"
        );
    }
}
