//! Publishers: drive an uploaded asset through the pipeline and update the
//! video record once the asset is durably placed.

pub mod metadata;
pub mod thumbnail;
pub mod video;

pub use metadata::VideoStore;
pub use thumbnail::ThumbnailPublisher;
pub use video::VideoPublisher;

use bytes::Bytes;
use reelcast_core::models::Video;
use reelcast_core::AppError;
use uuid::Uuid;

/// One uploaded file as received from the request, before staging.
pub struct UploadedAsset {
    pub content_type: String,
    pub data: Bytes,
}

/// Deny unless `user_id` owns the video record.
fn authorize_owner(user_id: Uuid, video: &Video) -> Result<(), AppError> {
    if video.user_id != user_id {
        return Err(AppError::Unauthorized(
            "You do not own this video".to_string(),
        ));
    }
    Ok(())
}

/// Exact-match content type check against the configured allowlist.
fn validate_content_type(content_type: &str, allowed: &[String]) -> Result<(), AppError> {
    let normalized = content_type.to_lowercase();
    if !allowed.iter().any(|a| a == &normalized) {
        return Err(AppError::InvalidInput(format!(
            "Unsupported content type: {}",
            content_type
        )));
    }
    Ok(())
}

/// File extension for a MIME type, taken from the subtype.
fn extension_for(content_type: &str) -> Result<&str, AppError> {
    content_type
        .split('/')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("Malformed content type: {}", content_type))
        })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::probe::{MediaInspector, VideoDimensions};
    use crate::remux::MediaRemuxer;
    use crate::ProcessingError;
    use async_trait::async_trait;
    use chrono::Utc;
    use reelcast_storage::{Storage, StorageError, StorageResult};
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    pub fn test_video(user_id: Uuid) -> Video {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            user_id,
            title: "boots and cats".to_string(),
            description: None,
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// In-memory storage fake recording puts by key.
    #[derive(Default)]
    pub struct FakeStorage {
        pub objects: Mutex<HashMap<String, (String, Vec<u8>)>>,
        pub fail_puts: bool,
    }

    impl FakeStorage {
        pub fn failing() -> Self {
            FakeStorage {
                objects: Mutex::new(HashMap::new()),
                fail_puts: true,
            }
        }

        pub fn object_count(&self) -> usize {
            self.objects.lock().unwrap().len()
        }

        pub fn single_key(&self) -> String {
            let objects = self.objects.lock().unwrap();
            assert_eq!(objects.len(), 1);
            objects.keys().next().unwrap().clone()
        }
    }

    #[async_trait]
    impl Storage for FakeStorage {
        async fn put(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<String> {
            if self.fail_puts {
                return Err(StorageError::UploadFailed("fake failure".to_string()));
            }
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), (content_type.to_string(), data.to_vec()));
            Ok(self.public_url(key))
        }

        async fn put_file(
            &self,
            key: &str,
            content_type: &str,
            path: &Path,
        ) -> StorageResult<String> {
            let data = std::fs::read(path)?;
            self.put(key, content_type, Bytes::from(data)).await
        }

        async fn delete(&self, key: &str) -> StorageResult<()> {
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> StorageResult<bool> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://cdn.test/{}", key)
        }
    }

    /// Record store fake tracking updates.
    #[derive(Default)]
    pub struct FakeVideoStore {
        pub updated: Mutex<Vec<Video>>,
        pub fail_updates: bool,
    }

    impl FakeVideoStore {
        pub fn failing() -> Self {
            FakeVideoStore {
                updated: Mutex::new(Vec::new()),
                fail_updates: true,
            }
        }

        pub fn update_count(&self) -> usize {
            self.updated.lock().unwrap().len()
        }

        pub fn last_update(&self) -> Video {
            self.updated.lock().unwrap().last().unwrap().clone()
        }
    }

    #[async_trait]
    impl VideoStore for FakeVideoStore {
        async fn get_video(&self, _id: Uuid) -> Result<Option<Video>, AppError> {
            Ok(None)
        }

        async fn update_video(&self, video: &Video) -> Result<(), AppError> {
            if self.fail_updates {
                return Err(AppError::Internal("fake database failure".to_string()));
            }
            self.updated.lock().unwrap().push(video.clone());
            Ok(())
        }
    }

    /// Inspector fake returning fixed dimensions.
    pub struct FakeInspector {
        pub dimensions: Result<VideoDimensions, String>,
    }

    impl FakeInspector {
        pub fn returning(width: i64, height: i64) -> Self {
            Self {
                dimensions: Ok(VideoDimensions { width, height }),
            }
        }

        pub fn failing() -> Self {
            Self {
                dimensions: Err("fake probe failure".to_string()),
            }
        }
    }

    #[async_trait]
    impl MediaInspector for FakeInspector {
        async fn probe(&self, _path: &Path) -> Result<VideoDimensions, ProcessingError> {
            self.dimensions
                .clone()
                .map_err(ProcessingError::Probe)
        }
    }

    /// Remuxer fake that copies the input file, or fails.
    pub struct FakeRemuxer {
        pub fail: bool,
    }

    impl FakeRemuxer {
        pub fn passthrough() -> Self {
            Self { fail: false }
        }

        pub fn failing() -> Self {
            Self { fail: true }
        }
    }

    #[async_trait]
    impl MediaRemuxer for FakeRemuxer {
        async fn fast_start(&self, input: &Path, output: &Path) -> Result<(), ProcessingError> {
            if self.fail {
                return Err(ProcessingError::Remux("fake remux failure".to_string()));
            }
            tokio::fs::copy(input, output)
                .await
                .map_err(|e| ProcessingError::Remux(e.to_string()))?;
            Ok(())
        }
    }
}
