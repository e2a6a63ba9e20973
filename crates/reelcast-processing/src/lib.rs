//! Upload processing pipeline: staging, inspection, remuxing, publishing.
//!
//! An uploaded video passes through a temp-dir staging area, an ffprobe
//! inspection that classifies its aspect ratio, and an ffmpeg fast-start
//! remux before the result is handed to a storage backend. The publishers
//! in `publish` drive the full sequence and update the video record only
//! after the asset is durably placed.

pub mod error;
pub mod probe;
pub mod publish;
pub mod remux;
pub mod staging;

pub use error::ProcessingError;
pub use probe::{FfprobeInspector, MediaInspector, VideoDimensions};
pub use publish::{ThumbnailPublisher, UploadedAsset, VideoPublisher, VideoStore};
pub use remux::{FfmpegRemuxer, MediaRemuxer};
pub use staging::StagedUpload;
