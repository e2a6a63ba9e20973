//! Thumbnail publishing: validate, write to the asset directory, record.

use super::{authorize_owner, extension_for, validate_content_type, UploadedAsset, VideoStore};
use reelcast_core::models::Video;
use reelcast_core::AppError;
use reelcast_storage::{generate_asset_key, Storage};
use std::sync::Arc;
use uuid::Uuid;

/// Publishes an uploaded thumbnail to the local asset directory under a
/// random key and records the public URL.
pub struct ThumbnailPublisher {
    store: Arc<dyn VideoStore>,
    storage: Arc<dyn Storage>,
    allowed_content_types: Vec<String>,
}

impl ThumbnailPublisher {
    pub fn new(
        store: Arc<dyn VideoStore>,
        storage: Arc<dyn Storage>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            store,
            storage,
            allowed_content_types,
        }
    }

    /// The record is mutated only after the asset write is durable. An
    /// update failure after the write leaves an orphaned file; logged at
    /// error level for reconciliation.
    #[tracing::instrument(skip(self, video, upload), fields(video_id = %video.id))]
    pub async fn publish(
        &self,
        user_id: Uuid,
        video: Video,
        upload: UploadedAsset,
    ) -> Result<Video, AppError> {
        authorize_owner(user_id, &video)?;
        validate_content_type(&upload.content_type, &self.allowed_content_types)?;
        let extension = extension_for(&upload.content_type)?;

        let key = generate_asset_key(None, extension);
        let size_bytes = upload.data.len();

        let url = self
            .storage
            .put(&key, &upload.content_type, upload.data)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let mut updated = video;
        updated.thumbnail_url = Some(url.clone());

        if let Err(e) = self.store.update_video(&updated).await {
            tracing::error!(
                video_id = %updated.id,
                storage_key = %key,
                error = %e,
                "Video record update failed after thumbnail write; stored file is orphaned"
            );
            return Err(AppError::MetadataUpdate(format!(
                "Failed to record thumbnail URL for {}: {}",
                updated.id, e
            )));
        }

        tracing::info!(
            video_id = %updated.id,
            key = %key,
            size_bytes = size_bytes,
            url = %url,
            "Thumbnail published"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::testing::{test_video, FakeStorage, FakeVideoStore};
    use bytes::Bytes;

    fn png_upload() -> UploadedAsset {
        UploadedAsset {
            content_type: "image/png".to_string(),
            data: Bytes::from_static(b"fake png bytes"),
        }
    }

    fn publisher(store: Arc<FakeVideoStore>, storage: Arc<FakeStorage>) -> ThumbnailPublisher {
        ThumbnailPublisher::new(
            store,
            storage,
            vec!["image/jpeg".to_string(), "image/png".to_string()],
        )
    }

    #[tokio::test]
    async fn test_publish_thumbnail() {
        let store = Arc::new(FakeVideoStore::default());
        let storage = Arc::new(FakeStorage::default());
        let user_id = Uuid::new_v4();

        let published = publisher(store.clone(), storage.clone())
            .publish(user_id, test_video(user_id), png_upload())
            .await
            .unwrap();

        let key = storage.single_key();
        assert!(key.ends_with(".png"));
        assert!(!key.contains('/'));
        assert_eq!(
            published.thumbnail_url.as_deref(),
            Some(format!("https://cdn.test/{}", key).as_str())
        );
        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_content_type_rejected() {
        let store = Arc::new(FakeVideoStore::default());
        let storage = Arc::new(FakeStorage::default());
        let user_id = Uuid::new_v4();

        let result = publisher(store.clone(), storage.clone())
            .publish(
                user_id,
                test_video(user_id),
                UploadedAsset {
                    content_type: "image/gif".to_string(),
                    data: Bytes::from_static(b"x"),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(storage.object_count(), 0);
        assert_eq!(store.update_count(), 0);
    }

    #[tokio::test]
    async fn test_owner_mismatch_denied() {
        let store = Arc::new(FakeVideoStore::default());
        let storage = Arc::new(FakeStorage::default());

        let result = publisher(store.clone(), storage.clone())
            .publish(Uuid::new_v4(), test_video(Uuid::new_v4()), png_upload())
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn test_metadata_failure_leaves_orphaned_file() {
        let store = Arc::new(FakeVideoStore::failing());
        let storage = Arc::new(FakeStorage::default());
        let user_id = Uuid::new_v4();

        let result = publisher(store, storage.clone())
            .publish(user_id, test_video(user_id), png_upload())
            .await;

        assert!(matches!(result, Err(AppError::MetadataUpdate(_))));
        assert_eq!(storage.object_count(), 1);
    }
}
