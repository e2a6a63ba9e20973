use crate::{LocalAssetStorage, S3Storage, Storage, StorageResult};
use reelcast_core::Config;
use std::sync::Arc;

/// Create the S3 backend that published videos are written to.
pub fn create_video_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
        config.cdn_host.clone(),
    )?;
    Ok(Arc::new(storage))
}

/// Create the local asset-directory backend that published thumbnails are
/// written to.
pub async fn create_thumbnail_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage =
        LocalAssetStorage::new(config.assets_root.clone(), config.assets_base_url.clone()).await?;
    Ok(Arc::new(storage))
}
