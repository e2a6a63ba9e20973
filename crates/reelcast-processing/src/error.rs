use reelcast_core::AppError;
use thiserror::Error;

/// Pipeline stage errors. Every variant is terminal for the request; no
/// stage retries internally.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Staging failed: {0}")]
    Staging(String),

    #[error("Probe failed: {0}")]
    Probe(String),

    #[error("Remux failed: {0}")]
    Remux(String),
}

impl From<ProcessingError> for AppError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::Staging(msg) => AppError::Staging(msg),
            ProcessingError::Probe(msg) => AppError::Probe(msg),
            ProcessingError::Remux(msg) => AppError::Remux(msg),
        }
    }
}
