//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use tubely_media::MediaError;
use tubely_storage::StorageError;
use tubely_store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(#[source] std::io::Error),

    #[error("Processing failed: {0}")]
    ProcessingFailed(#[source] MediaError),

    #[error("Upload failed: {0}")]
    UploadFailed(#[source] StorageError),

    #[error("Persistence failed: {0}")]
    PersistenceFailed(#[source] StoreError),
}

impl ApiError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        Self::UnsupportedMediaType(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::UnsupportedMediaType(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StorageUnavailable(_)
            | ApiError::ProcessingFailed(_)
            | ApiError::UploadFailed(_)
            | ApiError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::NotFound(_) => "not_found",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::StorageUnavailable(_) => "storage_unavailable",
            ApiError::ProcessingFailed(_) => "processing_failed",
            ApiError::UploadFailed(_) => "upload_failed",
            ApiError::PersistenceFailed(_) => "persistence_failed",
        }
    }

    /// Message safe to show the client. Server-side failures never expose
    /// paths, subprocess output or backend errors.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidRequest(msg)
            | ApiError::Unauthenticated(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::UnsupportedMediaType(msg) => msg.clone(),
            ApiError::StorageUnavailable(_) => "Unable to save video on server".to_string(),
            ApiError::ProcessingFailed(_) => "Unable to process video for fast start".to_string(),
            ApiError::UploadFailed(_) => "Unable to upload video".to_string(),
            ApiError::PersistenceFailed(_) => "Unable to update video".to_string(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        if status.is_server_error() {
            match &self {
                ApiError::ProcessingFailed(e) => {
                    error!(code, error = %self, stderr = e.stderr().unwrap_or(""), "Request failed")
                }
                _ => error!(code, error = %self, "Request failed"),
            }
        } else {
            warn!(code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            detail: self.public_message(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
