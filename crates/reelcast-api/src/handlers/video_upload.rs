use crate::auth::UserContext;
use crate::error::HttpAppError;
use crate::handlers::extract_upload;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelcast_core::models::VideoResponse;
use reelcast_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// POST /api/videos/{video_id}/video
///
/// Accepts a multipart form with one `video` field, runs the publish
/// pipeline, and returns the updated record. Ownership is checked before
/// the body is consumed.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = state
        .videos
        .get_by_id(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if video.user_id != user.user_id {
        return Err(HttpAppError(AppError::Unauthorized(
            "You do not own this video".to_string(),
        )));
    }

    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Video upload started");

    let upload = extract_upload(multipart, "video", state.config.max_video_size_bytes).await?;

    let published = state
        .video_publisher
        .publish(user.user_id, video, upload)
        .await?;

    Ok(Json(VideoResponse::from(published)))
}
