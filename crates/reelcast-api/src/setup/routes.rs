//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Slack for multipart framing on top of the file size cap.
const MULTIPART_OVERHEAD_BYTES: usize = 1 << 20;

// Server-level ceiling on in-flight requests.
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let video_upload = Router::new()
        .route(
            "/api/videos/{video_id}/video",
            post(handlers::video_upload::upload_video),
        )
        .layer(DefaultBodyLimit::max(
            state.config.max_video_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    let thumbnail_upload = Router::new()
        .route(
            "/api/videos/{video_id}/thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(DefaultBodyLimit::max(
            state.config.max_thumbnail_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    let api_routes = Router::new()
        .route(
            "/api/videos",
            post(handlers::video_meta::create_video).get(handlers::video_meta::list_videos),
        )
        .route(
            "/api/videos/{video_id}",
            get(handlers::video_get::get_video),
        )
        .merge(video_upload)
        .merge(thumbnail_upload);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        .nest_service("/assets", ServeDir::new(&state.config.assets_root))
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
