//! Video publishing: stage, probe, remux, upload, record.

use super::{authorize_owner, extension_for, validate_content_type, UploadedAsset, VideoStore};
use crate::probe::MediaInspector;
use crate::remux::MediaRemuxer;
use crate::staging::StagedUpload;
use reelcast_core::models::{AspectClass, Video};
use reelcast_core::AppError;
use reelcast_storage::{generate_asset_key, Storage};
use std::sync::Arc;
use uuid::Uuid;

const STAGED_FILENAME: &str = "upload.mp4";
const REMUXED_FILENAME: &str = "faststart.mp4";

/// Publishes an uploaded video: probes its aspect ratio, remuxes it for
/// progressive playback, uploads the remuxed bytes to object storage under
/// an aspect-prefixed key, and records the public URL.
pub struct VideoPublisher {
    store: Arc<dyn VideoStore>,
    storage: Arc<dyn Storage>,
    inspector: Arc<dyn MediaInspector>,
    remuxer: Arc<dyn MediaRemuxer>,
    allowed_content_types: Vec<String>,
}

impl VideoPublisher {
    pub fn new(
        store: Arc<dyn VideoStore>,
        storage: Arc<dyn Storage>,
        inspector: Arc<dyn MediaInspector>,
        remuxer: Arc<dyn MediaRemuxer>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            store,
            storage,
            inspector,
            remuxer,
            allowed_content_types,
        }
    }

    /// Run the full video publish sequence.
    ///
    /// The record is mutated only after the remuxed asset is durably in
    /// object storage. A record-update failure after a successful upload
    /// leaves an orphaned object; it is logged at error level for
    /// reconciliation and never deleted here.
    #[tracing::instrument(skip(self, video, upload), fields(video_id = %video.id))]
    pub async fn publish(
        &self,
        user_id: Uuid,
        video: Video,
        upload: UploadedAsset,
    ) -> Result<Video, AppError> {
        authorize_owner(user_id, &video)?;
        validate_content_type(&upload.content_type, &self.allowed_content_types)?;
        let extension = extension_for(&upload.content_type)?.to_string();

        let size_bytes = upload.data.len();
        let staged = StagedUpload::from_bytes(&upload.data, STAGED_FILENAME).await?;

        // Classify on the original file; the remux is stream-copy and
        // cannot change dimensions.
        let dimensions = self.inspector.probe(staged.source_path()).await?;
        let aspect = AspectClass::from_dimensions(dimensions.width, dimensions.height);

        let remuxed_path = staged.sibling_path(REMUXED_FILENAME);
        self.remuxer
            .fast_start(staged.source_path(), &remuxed_path)
            .await?;

        let key = generate_asset_key(Some(aspect.prefix()), &extension);

        let url = self
            .storage
            .put_file(&key, &upload.content_type, &remuxed_path)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let mut updated = video;
        updated.video_url = Some(url.clone());

        if let Err(e) = self.store.update_video(&updated).await {
            tracing::error!(
                video_id = %updated.id,
                storage_key = %key,
                error = %e,
                "Video record update failed after upload; stored object is orphaned"
            );
            return Err(AppError::MetadataUpdate(format!(
                "Failed to record video URL for {}: {}",
                updated.id, e
            )));
        }

        tracing::info!(
            video_id = %updated.id,
            aspect = %aspect,
            key = %key,
            size_bytes = size_bytes,
            url = %url,
            "Video published"
        );

        Ok(updated)
    }
}
