//! Video repository: CRUD for the videos table.

use chrono::Utc;
use reelcast_core::models::Video;
use reelcast_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for the videos table.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new video record and return it.
    #[tracing::instrument(skip(self, description), fields(db.table = "videos"))]
    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> Result<Video, AppError> {
        let video: Video = sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (id, user_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, user_id, title, description, thumbnail_url, video_url,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&title)
        .bind(&description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(video)
    }

    /// Fetch a video by id.
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.record_id = %id))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video: Option<Video> = sqlx::query_as::<Postgres, Video>(
            r#"
            SELECT id, user_id, title, description, thumbnail_url, video_url,
                   created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(video)
    }

    /// Persist the asset URLs of a video record.
    ///
    /// Writes `thumbnail_url` and `video_url` as given and bumps
    /// `updated_at`. Returns an error if the record no longer exists.
    #[tracing::instrument(skip(self, video), fields(db.table = "videos", db.record_id = %video.id))]
    pub async fn update_urls(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET thumbnail_url = $2, video_url = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }
        Ok(())
    }

    /// List a user's videos, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.user_id = %user_id))]
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos: Vec<Video> = sqlx::query_as::<Postgres, Video>(
            r#"
            SELECT id, user_id, title, description, thumbnail_url, video_url,
                   created_at, updated_at
            FROM videos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(videos)
    }
}
