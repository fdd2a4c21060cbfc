//! Business logic behind the HTTP handlers.

pub mod upload;

pub use upload::{UploadConfig, UploadPipeline, ACCEPTED_MEDIA_TYPE};
