//! Fast-start remuxing via ffmpeg.

use crate::ProcessingError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Rewrites a video container for progressive playback.
///
/// A trait seam so the publishers can be tested without an ffmpeg binary.
#[async_trait]
pub trait MediaRemuxer: Send + Sync {
    /// Remux `input` into `output` with the moov atom at the front.
    /// Streams are copied, not re-encoded.
    async fn fast_start(&self, input: &Path, output: &Path) -> Result<(), ProcessingError>;
}

/// Production remuxer shelling out to ffmpeg.
pub struct FfmpegRemuxer {
    ffmpeg_path: String,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: String) -> Self {
        Self { ffmpeg_path }
    }
}

#[async_trait]
impl MediaRemuxer for FfmpegRemuxer {
    #[tracing::instrument(skip(self, input, output), fields(
        process.executable.path = %self.ffmpeg_path,
        ffmpeg.operation = "faststart"
    ))]
    async fn fast_start(&self, input: &Path, output: &Path) -> Result<(), ProcessingError> {
        let start = std::time::Instant::now();

        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ProcessingError::Remux(format!("Failed to execute ffmpeg: {}", e)))?;

        if !result.status.success() {
            return Err(ProcessingError::Remux(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr)
            )));
        }

        tracing::info!(
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Fast-start remux completed"
        );

        Ok(())
    }
}
