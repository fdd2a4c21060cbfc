//! Liveness and readiness handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tubely_media::{check_ffmpeg, check_ffprobe};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness: the process is up and serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Whether the upload pipeline's dependencies are usable.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub ffmpeg: Check,
    pub ffprobe: Check,
    pub storage: Check,
}

/// Outcome of a single dependency check.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Check {
    Ok,
    Failed { error: String },
}

impl Check {
    fn from_result<T, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Check::Ok,
            Err(e) => Check::Failed {
                error: e.to_string(),
            },
        }
    }

    fn is_ok(&self) -> bool {
        matches!(self, Check::Ok)
    }
}

/// Readiness: ffmpeg and ffprobe are installed and the bucket answers.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let ffmpeg = Check::from_result(check_ffmpeg());
    let ffprobe = Check::from_result(check_ffprobe());
    let storage = Check::from_result(state.storage.check_connectivity().await);

    let ready = ffmpeg.is_ok() && ffprobe.is_ok() && storage.is_ok();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            ffmpeg,
            ffprobe,
            storage,
        }),
    )
}
