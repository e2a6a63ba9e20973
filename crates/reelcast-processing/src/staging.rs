//! Temp-dir staging for uploaded files.

use crate::ProcessingError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An uploaded file staged in an exclusive temp directory.
///
/// The remuxed output is written as a sibling file in the same directory.
/// Dropping the handle removes the whole directory, so staged and derived
/// files are released on every exit path, including request abort.
pub struct StagedUpload {
    temp_dir: TempDir,
    source_path: PathBuf,
}

impl StagedUpload {
    /// Stage `data` as `filename` inside a fresh temp directory.
    pub async fn from_bytes(data: &[u8], filename: &str) -> Result<Self, ProcessingError> {
        let temp_dir = TempDir::new()
            .map_err(|e| ProcessingError::Staging(format!("Failed to create temp dir: {}", e)))?;

        let source_path = temp_dir.path().join(filename);
        tokio::fs::write(&source_path, data).await.map_err(|e| {
            ProcessingError::Staging(format!(
                "Failed to write staged file {}: {}",
                source_path.display(),
                e
            ))
        })?;

        Ok(StagedUpload {
            temp_dir,
            source_path,
        })
    }

    /// Path of the staged source file.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Path for a derived file next to the staged source.
    pub fn sibling_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_staged_file_holds_bytes() {
        let staged = StagedUpload::from_bytes(b"video bytes", "upload.mp4")
            .await
            .unwrap();
        assert_eq!(
            std::fs::read(staged.source_path()).unwrap(),
            b"video bytes"
        );
    }

    #[tokio::test]
    async fn test_sibling_path_shares_directory() {
        let staged = StagedUpload::from_bytes(b"x", "upload.mp4").await.unwrap();
        let sibling = staged.sibling_path("faststart.mp4");
        assert_eq!(sibling.parent(), staged.source_path().parent());
    }

    #[tokio::test]
    async fn test_drop_removes_directory() {
        let staged = StagedUpload::from_bytes(b"x", "upload.mp4").await.unwrap();
        let dir = staged.source_path().parent().unwrap().to_path_buf();
        assert!(dir.exists());
        drop(staged);
        assert!(!dir.exists());
    }
}
