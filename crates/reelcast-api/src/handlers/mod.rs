//! HTTP handlers for the video API.

pub mod health;
pub mod thumbnail_upload;
pub mod video_get;
pub mod video_meta;
pub mod video_upload;

use axum::extract::Multipart;
use bytes::Bytes;
use reelcast_core::AppError;
use reelcast_processing::UploadedAsset;

/// Normalize a MIME type by stripping parameters
/// (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Extract the single expected file part from a multipart form.
///
/// Exactly one field named `part_name` is accepted; a duplicate or missing
/// field is rejected. The size cap is enforced here in addition to the
/// route-level body limit.
pub async fn extract_upload(
    mut multipart: Multipart,
    part_name: &str,
    max_size_bytes: usize,
) -> Result<UploadedAsset, AppError> {
    let mut upload: Option<UploadedAsset> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == part_name {
            if upload.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple '{}' fields are not allowed; send exactly one",
                    part_name
                )));
            }

            let content_type = field
                .content_type()
                .map(|s| normalize_mime_type(s).to_lowercase())
                .ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "Missing content type on '{}' field",
                        part_name
                    ))
                })?;

            let data: Bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            if data.len() > max_size_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "File size exceeds maximum allowed size of {} MB",
                    max_size_bytes / 1024 / 1024
                )));
            }

            if data.is_empty() {
                return Err(AppError::InvalidInput("File is empty".to_string()));
            }

            upload = Some(UploadedAsset { content_type, data });
        }
    }

    upload.ok_or_else(|| AppError::InvalidInput(format!("No '{}' field provided", part_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mime_type_strips_parameters() {
        assert_eq!(
            normalize_mime_type("image/jpeg; charset=utf-8"),
            "image/jpeg"
        );
        assert_eq!(normalize_mime_type("video/mp4"), "video/mp4");
    }
}
