//! FFprobe stream inspection.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::debug;
use tubely_models::AspectClassification;

use crate::error::{MediaError, MediaResult};

/// Geometry of the first video stream in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamGeometry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Display aspect ratio as reported by ffprobe, e.g. "16:9"
    pub display_aspect_ratio: Option<String>,
}

impl StreamGeometry {
    pub fn classification(&self) -> AspectClassification {
        self.display_aspect_ratio
            .as_deref()
            .map(AspectClassification::from_display_aspect_ratio)
            .unwrap_or_default()
    }
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    display_aspect_ratio: Option<String>,
}

/// Classifies a video file by orientation.
#[async_trait]
pub trait Inspector: Send + Sync {
    /// Fails with [`MediaError::NoStreamsFound`] or [`MediaError::ProbeFailed`].
    async fn classify(&self, path: &Path) -> MediaResult<AspectClassification>;
}

/// [`Inspector`] backed by the `ffprobe` CLI.
#[derive(Debug, Clone)]
pub struct FfprobeInspector {
    binary: String,
    timeout: Option<Duration>,
}

impl Default for FfprobeInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl FfprobeInspector {
    pub fn new() -> Self {
        Self {
            binary: "ffprobe".to_string(),
            timeout: None,
        }
    }

    /// Use a different ffprobe program.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Probe `path` and return the geometry of its first video stream.
    pub async fn geometry(&self, path: &Path) -> MediaResult<StreamGeometry> {
        let program = which::which(&self.binary).map_err(|e| {
            MediaError::probe_failed(format!("{} not available: {}", self.binary, e), None)
        })?;

        let child = Command::new(&program)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| MediaError::probe_failed(format!("Failed to spawn ffprobe: {}", e), None))?;

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| {
                    MediaError::probe_failed(
                        format!("ffprobe timed out after {} seconds", timeout.as_secs()),
                        None,
                    )
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| MediaError::probe_failed(format!("ffprobe I/O error: {}", e), None))?;

        if !output.status.success() {
            return Err(MediaError::probe_failed(
                format!("ffprobe exited with {}", output.status),
                Some(String::from_utf8_lossy(&output.stderr).trim().to_string()),
            ));
        }

        let geometry = parse_probe_output(&output.stdout)?;
        debug!(
            path = %path.display(),
            width = geometry.width,
            height = geometry.height,
            dar = ?geometry.display_aspect_ratio,
            "Probed video stream"
        );
        Ok(geometry)
    }
}

#[async_trait]
impl Inspector for FfprobeInspector {
    async fn classify(&self, path: &Path) -> MediaResult<AspectClassification> {
        Ok(self.geometry(path).await?.classification())
    }
}

/// Parse `ffprobe -print_format json -show_streams` output.
fn parse_probe_output(stdout: &[u8]) -> MediaResult<StreamGeometry> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout).map_err(|e| {
        MediaError::probe_failed(format!("Could not parse ffprobe output: {}", e), None)
    })?;

    let stream = probe
        .streams
        .into_iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or(MediaError::NoStreamsFound)?;

    Ok(StreamGeometry {
        width: stream.width.unwrap_or(0),
        height: stream.height.unwrap_or(0),
        display_aspect_ratio: stream.display_aspect_ratio,
    })
}
