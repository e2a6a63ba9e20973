use crate::auth::UserContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use reelcast_core::models::VideoResponse;
use reelcast_core::AppError;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /api/videos
///
/// Create a video record for the caller. Asset URLs stay unset until the
/// corresponding upload is published.
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Json(request): Json<CreateVideoRequest>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    if request.title.trim().is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(
            "Title must not be empty".to_string(),
        )));
    }

    let video = state
        .videos
        .create(user.user_id, request.title, request.description)
        .await?;

    tracing::info!(video_id = %video.id, user_id = %user.user_id, "Video record created");

    Ok(Json(VideoResponse::from(video)))
}

/// GET /api/videos
///
/// List the caller's videos, newest first.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    user: UserContext,
) -> Result<Json<Vec<VideoResponse>>, HttpAppError> {
    let videos = state.videos.list_by_user(user.user_id).await?;
    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}
