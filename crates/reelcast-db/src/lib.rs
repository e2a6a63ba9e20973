//! Database repositories for the video metadata store.

pub mod video_repository;

pub use video_repository::VideoRepository;
