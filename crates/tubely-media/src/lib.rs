//! FFmpeg CLI wrapper for upload processing.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and a runner with timeouts
//! - Fast-start remuxing (`moov` atom moved to the front, no re-encode)
//! - FFprobe stream inspection and aspect classification
//! - Scratch files that are removed on every exit path

pub mod command;
pub mod error;
pub mod faststart;
pub mod probe;
pub mod scratch;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use faststart::{FfmpegRemuxer, Remuxer};
pub use probe::{FfprobeInspector, Inspector, StreamGeometry};
pub use scratch::ScratchFile;
