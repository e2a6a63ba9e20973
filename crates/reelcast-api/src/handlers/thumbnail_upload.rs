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

/// POST /api/videos/{video_id}/thumbnail
///
/// Accepts a multipart form with one `thumbnail` field, writes it to the
/// asset directory, and returns the updated record.
pub async fn upload_thumbnail(
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

    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Thumbnail upload started");

    let upload = extract_upload(
        multipart,
        "thumbnail",
        state.config.max_thumbnail_size_bytes,
    )
    .await?;

    let published = state
        .thumbnail_publisher
        .publish(user.user_id, video, upload)
        .await?;

    Ok(Json(VideoResponse::from(published)))
}
