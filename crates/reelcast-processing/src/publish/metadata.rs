use async_trait::async_trait;
use reelcast_core::models::Video;
use reelcast_core::AppError;
use uuid::Uuid;

/// Metadata store seam for the publishers.
///
/// The API crate implements this over the Postgres repository; tests use
/// an in-memory fake.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Persist the record's asset URLs. Must not create records.
    async fn update_video(&self, video: &Video) -> Result<(), AppError>;
}
