use crate::auth::UserContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use reelcast_core::models::VideoResponse;
use reelcast_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// GET /api/videos/{video_id}
///
/// Owner-only fetch of a video record.
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<Uuid>,
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

    Ok(Json(VideoResponse::from(video)))
}
