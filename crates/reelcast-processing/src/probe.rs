//! Media inspection via ffprobe.

use crate::ProcessingError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Pixel dimensions of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoDimensions {
    pub width: i64,
    pub height: i64,
}

/// Extracts stream dimensions from a staged video file.
///
/// A trait seam so the publishers can be tested without an ffprobe binary.
#[async_trait]
pub trait MediaInspector: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<VideoDimensions, ProcessingError>;
}

/// Production inspector shelling out to ffprobe.
pub struct FfprobeInspector {
    ffprobe_path: String,
}

impl FfprobeInspector {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    width: Option<i64>,
    height: Option<i64>,
}

/// Pull the first stream carrying pixel dimensions out of ffprobe's JSON.
fn parse_probe_output(stdout: &[u8]) -> Result<VideoDimensions, ProcessingError> {
    let parsed: ProbeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::Probe(format!("Unparsable ffprobe output: {}", e)))?;

    parsed
        .streams
        .iter()
        .find_map(|s| match (s.width, s.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Some(VideoDimensions { width, height })
            }
            _ => None,
        })
        .ok_or_else(|| ProcessingError::Probe("No video stream with dimensions found".to_string()))
}

#[async_trait]
impl MediaInspector for FfprobeInspector {
    #[tracing::instrument(skip(self, path), fields(
        process.executable.path = %self.ffprobe_path,
        ffmpeg.operation = "probe"
    ))]
    async fn probe(&self, path: &Path) -> Result<VideoDimensions, ProcessingError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ProcessingError::Probe(format!("Failed to execute ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(ProcessingError::Probe(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let dimensions = parse_probe_output(&output.stdout)?;

        tracing::info!(
            width = dimensions.width,
            height = dimensions.height,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Video probe completed"
        );

        Ok(dimensions)
    }
}
