//! Shared data models for the Tubely upload service.
//!
//! This crate provides Serde-serializable types for:
//! - Video records and their identifiers
//! - Aspect ratio classification used to namespace storage keys

pub mod aspect;
pub mod video;

pub use aspect::AspectClassification;
pub use video::{InvalidVideoId, NewVideo, VideoId, VideoRecord};
