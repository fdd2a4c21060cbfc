//! Video API handlers.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use tubely_models::{NewVideo, VideoId, VideoRecord};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Multipart field carrying the video file.
pub const VIDEO_FIELD: &str = "video";

fn parse_video_id(path: Result<Path<String>, PathRejection>) -> ApiResult<VideoId> {
    let Path(raw) = path.map_err(|_| ApiError::invalid_request("Invalid ID"))?;
    VideoId::parse(&raw).map_err(|_| ApiError::invalid_request("Invalid ID"))
}

/// Create a draft video record with no media attached.
pub async fn create_video(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<NewVideo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<VideoRecord>)> {
    let Json(new_video) =
        payload.map_err(|e| ApiError::invalid_request(format!("Couldn't decode parameters: {}", e)))?;

    if new_video.title.trim().is_empty() {
        return Err(ApiError::invalid_request("Title is required"));
    }

    let record = VideoRecord::new(user.user_id, new_video);
    state
        .videos
        .create_video(&record)
        .await
        .map_err(ApiError::PersistenceFailed)?;

    info!(video_id = %record.id, user_id = %user.user_id, "Created video");
    Ok((StatusCode::CREATED, Json(record)))
}

/// List the caller's videos, newest first.
pub async fn list_videos(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<VideoRecord>>> {
    let videos = state
        .videos
        .list_videos(&user.user_id)
        .await
        .map_err(ApiError::PersistenceFailed)?;
    Ok(Json(videos))
}

/// Fetch one of the caller's videos.
pub async fn get_video(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    user: AuthUser,
) -> ApiResult<Json<VideoRecord>> {
    let video_id = parse_video_id(path)?;

    let record = state
        .videos
        .get_video(&video_id)
        .await
        .map_err(ApiError::PersistenceFailed)?
        .ok_or_else(|| ApiError::not_found("Couldn't find video"))?;

    if !record.is_owned_by(&user.user_id) {
        return Err(ApiError::forbidden("Not authorized to view this video"));
    }

    Ok(Json(record))
}

/// Upload a video file for an existing record.
///
/// Expects `multipart/form-data` with the file in the `video` field, declared
/// as `video/mp4`. Responds with the updated record.
pub async fn upload_video(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    user: Result<AuthUser, ApiError>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<VideoRecord>> {
    let result = upload(&state, path, user, multipart).await;
    metrics::record_upload(match &result {
        Ok(_) => "ok",
        Err(e) => e.code(),
    });
    result.map(Json)
}

async fn upload(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
    user: Result<AuthUser, ApiError>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<VideoRecord> {
    let video_id = parse_video_id(path)?;
    let user = user?;

    info!(video_id = %video_id, user_id = %user.user_id, "Uploading video");
    let record = state.uploads.authorize(&user.user_id, &video_id).await?;

    let mut multipart = multipart
        .map_err(|e| ApiError::invalid_request(format!("Unable to parse form data: {}", e)))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_request(format!("Unable to parse form data: {}", e)))?
    {
        // Only a file part counts; a plain form value named `video` is skipped.
        if field.name() != Some(VIDEO_FIELD) || field.file_name().is_none() {
            continue;
        }
        let content_type = field.content_type().map(str::to_owned);
        return state
            .uploads
            .publish(record, content_type.as_deref(), field)
            .await;
    }

    Err(ApiError::invalid_request("Unable to find video form field"))
}
