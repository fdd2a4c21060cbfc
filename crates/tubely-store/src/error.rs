//! Store error types.

use thiserror::Error;
use tubely_models::VideoId;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Video not found: {0}")]
    NotFound(VideoId),

    #[error("Video already exists: {0}")]
    AlreadyExists(VideoId),

    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
