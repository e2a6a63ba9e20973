//! VideoStore implementation backed by the Postgres repository.

use async_trait::async_trait;
use reelcast_core::models::Video;
use reelcast_core::AppError;
use reelcast_db::VideoRepository;
use reelcast_processing::VideoStore;
use uuid::Uuid;

pub struct VideoStoreImpl {
    repository: VideoRepository,
}

impl VideoStoreImpl {
    pub fn new(repository: VideoRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl VideoStore for VideoStoreImpl {
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        self.repository.get_by_id(id).await
    }

    async fn update_video(&self, video: &Video) -> Result<(), AppError> {
        self.repository.update_urls(video).await
    }
}
