use crate::traits::{validate_key, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as ObjectPath;
use object_store::{
    Attribute, Attributes, Error as ObjectStoreError, ObjectStore as _, ObjectStoreExt as _,
    PutOptions, PutPayload, Result as ObjectResult,
};
use std::path::Path;

/// S3 storage implementation for published video assets.
///
/// Objects are written to the bucket, but public URLs point at the CDN
/// distribution configured in front of it.
#[derive(Debug)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    cdn_host: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `cdn_host` - Public host the bucket is served from
    pub fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        cdn_host: String,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            cdn_host,
        })
    }

    fn put_options(content_type: &str) -> PutOptions {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        PutOptions {
            attributes,
            ..Default::default()
        }
    }

    async fn put_bytes(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<String> {
        let size = data.len() as u64;
        let location = ObjectPath::from(key.to_string());
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self
            .store
            .put_opts(
                &location,
                PutPayload::from(data),
                Self::put_options(content_type),
            )
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        let url = self.public_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<String> {
        validate_key(key)?;
        self.put_bytes(key, content_type, data).await
    }

    async fn put_file(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<String> {
        validate_key(key)?;

        // Buffer the file and upload in a single put. Simpler than a
        // multipart upload and uploads here are bounded by the request
        // body ceiling enforced upstream.
        let data = tokio::fs::read(path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        self.put_bytes(key, content_type, Bytes::from(data)).await
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        let location = ObjectPath::from(key.to_string());

        match self.store.delete(&location).await {
            Ok(()) => Ok(()),
            Err(ObjectStoreError::NotFound { .. }) => Ok(()),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 delete failed"
                );
                Err(StorageError::DeleteFailed(e.to_string()))
            }
        }
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        let location = ObjectPath::from(key.to_string());

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://{}/{}", self.cdn_host, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> S3Storage {
        // Builder resolves credentials from the environment; provide dummy
        // ones so construction succeeds without an AWS profile.
        std::env::set_var("AWS_ACCESS_KEY_ID", "test-access-key");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "test-secret-key");
        S3Storage::new(
            "reelcast-videos".to_string(),
            "us-east-1".to_string(),
            None,
            "d111111abcdef8.cloudfront.net".to_string(),
        )
        .expect("build storage")
    }

    #[test]
    fn test_public_url_uses_cdn_host() {
        let storage = test_storage();
        assert_eq!(
            storage.public_url("landscape/abc.mp4"),
            "https://d111111abcdef8.cloudfront.net/landscape/abc.mp4"
        );
    }

    #[tokio::test]
    async fn test_put_rejects_invalid_key() {
        let storage = test_storage();
        let result = storage
            .put("../abc.mp4", "video/mp4", Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
