//! Application state shared across handlers.

use crate::auth::JwtService;
use reelcast_core::Config;
use reelcast_db::VideoRepository;
use reelcast_processing::{ThumbnailPublisher, VideoPublisher};

pub struct AppState {
    pub config: Config,
    pub jwt: JwtService,
    pub videos: VideoRepository,
    pub video_publisher: VideoPublisher,
    pub thumbnail_publisher: ThumbnailPublisher,
}
