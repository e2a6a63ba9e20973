//! Application setup and initialization
//!
//! All application initialization logic lives here, extracted from main.rs
//! for better organization.

pub mod database;
pub mod routes;
pub mod server;

use crate::auth::JwtService;
use crate::state::AppState;
use crate::video_store_impl::VideoStoreImpl;
use anyhow::{Context, Result};
use reelcast_core::Config;
use reelcast_db::VideoRepository;
use reelcast_processing::{
    FfmpegRemuxer, FfprobeInspector, ThumbnailPublisher, VideoPublisher, VideoStore,
};
use reelcast_storage::{create_thumbnail_storage, create_video_storage};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;

    let video_storage =
        create_video_storage(&config).context("Failed to initialize video storage")?;
    let thumbnail_storage = create_thumbnail_storage(&config)
        .await
        .context("Failed to initialize thumbnail storage")?;

    let videos = VideoRepository::new(pool);
    let store: Arc<dyn VideoStore> = Arc::new(VideoStoreImpl::new(videos.clone()));

    let inspector = Arc::new(FfprobeInspector::new(config.ffprobe_path.clone()));
    let remuxer = Arc::new(FfmpegRemuxer::new(config.ffmpeg_path.clone()));

    let video_publisher = VideoPublisher::new(
        store.clone(),
        video_storage,
        inspector,
        remuxer,
        config.video_allowed_content_types.clone(),
    );
    let thumbnail_publisher = ThumbnailPublisher::new(
        store,
        thumbnail_storage,
        config.thumbnail_allowed_content_types.clone(),
    );

    let state = Arc::new(AppState {
        jwt: JwtService::new(&config.jwt_secret),
        videos,
        video_publisher,
        thumbnail_publisher,
        config,
    });

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
