//! Configuration module
//!
//! Environment-driven configuration for the API server, storage backends,
//! and external media tools. Loaded once at startup and validated before
//! the server starts accepting requests.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 8091;
// Upload body ceilings: 1 GiB for video, 10 MiB for thumbnails.
const DEFAULT_MAX_VIDEO_SIZE_BYTES: usize = 1 << 30;
const DEFAULT_MAX_THUMBNAIL_SIZE_BYTES: usize = 10 << 20;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub database_url: String,
    pub jwt_secret: String,
    // Remote object storage (published video assets)
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, localstack)
    pub s3_endpoint: Option<String>,
    /// Public host videos are served from (CDN distribution in front of the bucket)
    pub cdn_host: String,
    // Local asset directory (published thumbnails)
    pub assets_root: String,
    pub assets_base_url: String,
    // External media tools
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    // Upload limits and allowlists
    pub max_video_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
    pub video_allowed_content_types: Vec<String>,
    pub thumbnail_allowed_content_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let assets_base_url = env::var("ASSETS_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/assets", server_port));

        Ok(Config {
            server_port,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?,
            s3_bucket: env::var("S3_BUCKET")
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .map_err(|_| anyhow::anyhow!("S3_REGION or AWS_REGION must be set"))?,
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            cdn_host: env::var("CDN_HOST")
                .map_err(|_| anyhow::anyhow!("CDN_HOST must be set"))?,
            assets_root: env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            assets_base_url,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            max_video_size_bytes: env::var("MAX_VIDEO_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(DEFAULT_MAX_VIDEO_SIZE_BYTES),
            max_thumbnail_size_bytes: env::var("MAX_THUMBNAIL_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(DEFAULT_MAX_THUMBNAIL_SIZE_BYTES),
            video_allowed_content_types: parse_list(
                env::var("VIDEO_ALLOWED_CONTENT_TYPES").ok(),
                &["video/mp4"],
            ),
            thumbnail_allowed_content_types: parse_list(
                env::var("THUMBNAIL_ALLOWED_CONTENT_TYPES").ok(),
                &["image/jpeg", "image/png"],
            ),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters");
        }
        if self.cdn_host.contains("://") {
            anyhow::bail!("CDN_HOST must be a bare host name, without a scheme");
        }
        if self.max_video_size_bytes == 0 || self.max_thumbnail_size_bytes == 0 {
            anyhow::bail!("Upload size limits must be non-zero");
        }
        if self.video_allowed_content_types.is_empty()
            || self.thumbnail_allowed_content_types.is_empty()
        {
            anyhow::bail!("Allowed content type lists must not be empty");
        }
        Ok(())
    }
}

fn parse_list(value: Option<String>, defaults: &[&str]) -> Vec<String> {
    match value {
        Some(raw) => raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    }
}
