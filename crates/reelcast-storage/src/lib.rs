//! Storage backends for published assets.
//!
//! Published videos go to a remote S3 bucket fronted by a CDN; published
//! thumbnails go to a local asset directory served by the API. Both sit
//! behind the `Storage` trait so the publishers never see backend details.
//!
//! # Storage key format
//!
//! Keys are generated centrally in the `keys` module: 32 bytes of CSPRNG
//! output, URL-safe base64 without padding, with an optional prefix and the
//! asset's file extension (`[prefix/]<random>.<ext>`). Keys must not
//! contain `..` or a leading `/`.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use factory::{create_thumbnail_storage, create_video_storage};
pub use keys::generate_asset_key;
pub use local::LocalAssetStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
