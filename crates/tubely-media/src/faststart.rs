//! Fast-start remuxing.
//!
//! Moves the MP4 `moov` atom ahead of the media data so playback can begin
//! before the whole file is downloaded. Streams are copied, never re-encoded.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::scratch::ScratchFile;

/// Rewrites a video into a new scratch file laid out for progressive playback.
#[async_trait]
pub trait Remuxer: Send + Sync {
    /// Remux `input` into a new file. `input` is never modified.
    ///
    /// On error no output file is left behind.
    async fn remux(&self, input: &Path) -> MediaResult<ScratchFile>;
}

/// [`Remuxer`] backed by the `ffmpeg` CLI.
#[derive(Debug, Clone, Default)]
pub struct FfmpegRemuxer {
    runner: FfmpegRunner,
}

impl FfmpegRemuxer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different ffmpeg program.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.runner = self.runner.with_binary(binary);
        self
    }

    /// Bound the remux duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.runner = self.runner.with_timeout(timeout);
        self
    }

    fn command(input: &Path, output: &Path) -> FfmpegCommand {
        FfmpegCommand::new(input, output)
            .stream_copy()
            .movflags("faststart")
            .format("mp4")
    }
}

/// Directory the output is written to: next to the input.
fn output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir)
}

#[async_trait]
impl Remuxer for FfmpegRemuxer {
    async fn remux(&self, input: &Path) -> MediaResult<ScratchFile> {
        if !input.exists() {
            return Err(MediaError::FileNotFound(input.to_path_buf()));
        }

        let (output, file) = ScratchFile::create_in(&output_dir(input), "tubely-faststart-", ".mp4")?;
        drop(file);

        debug!(
            input = %input.display(),
            output = %output.path().display(),
            "Remuxing for fast start"
        );

        let start = Instant::now();
        self.runner.run(&Self::command(input, output.path())).await?;

        info!(
            output = %output.path().display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fast-start remux complete"
        );

        Ok(output)
    }
}
