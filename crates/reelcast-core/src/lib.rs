//! Core types shared across the reelcast workspace: the unified error
//! type, configuration, and domain models.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
