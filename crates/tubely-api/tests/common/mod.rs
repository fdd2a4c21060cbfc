//! Shared fixtures for router tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use tempfile::TempDir;
use tubely_api::auth::issue_token;
use tubely_api::{create_router, ApiConfig, AppState};
use tubely_media::{Inspector, MediaError, MediaResult, Remuxer, ScratchFile};
use tubely_models::AspectClassification;
use tubely_storage::{AssetKey, ObjectStore, StorageConfig, StorageResult};
use tubely_store::InMemoryVideoStore;
use uuid::Uuid;

pub const SECRET: &str = "router-test-secret";
pub const CDN: &str = "https://cdn.example.com";
pub const BOUNDARY: &str = "tubely-test-boundary";

/// Writes a copy of the input next to it.
pub struct CopyRemuxer;

#[async_trait]
impl Remuxer for CopyRemuxer {
    async fn remux(&self, input: &Path) -> MediaResult<ScratchFile> {
        let data = std::fs::read(input)?;
        let dir = input.parent().ok_or_else(|| MediaError::FileNotFound(input.to_path_buf()))?;
        let (out, mut file) = ScratchFile::create_in(dir, "tubely-faststart-", ".mp4")?;
        file.write_all(&data)?;
        Ok(out)
    }
}

pub struct FixedInspector(pub AspectClassification);

#[async_trait]
impl Inspector for FixedInspector {
    async fn classify(&self, _path: &Path) -> MediaResult<AspectClassification> {
        Ok(self.0)
    }
}

/// Object store that keeps `(key, bytes, content_type)` for each put.
#[derive(Default)]
pub struct RecordingObjects {
    pub puts: Mutex<Vec<(String, Vec<u8>, String)>>,
}

#[async_trait]
impl ObjectStore for RecordingObjects {
    async fn put_object(&self, key: &AssetKey, path: &Path, content_type: &str) -> StorageResult<()> {
        let data = std::fs::read(path).unwrap();
        self.puts
            .lock()
            .unwrap()
            .push((key.to_string(), data, content_type.to_string()));
        Ok(())
    }

    async fn check_connectivity(&self) -> StorageResult<()> {
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub objects: Arc<RecordingObjects>,
    pub videos: Arc<InMemoryVideoStore>,
    pub temp_dir: TempDir,
    pub assets_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(customize: impl FnOnce(&mut ApiConfig)) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let assets_dir = TempDir::new().unwrap();

        let mut config = ApiConfig::new(
            SECRET,
            StorageConfig {
                bucket: "tubely-media".to_string(),
                region: "us-east-2".to_string(),
                cdn_origin: Some(CDN.to_string()),
                endpoint_url: None,
                access_key_id: None,
                secret_access_key: None,
            },
        );
        config.upload_temp_dir = temp_dir.path().to_path_buf();
        config.assets_root = assets_dir.path().to_path_buf();
        customize(&mut config);

        let objects = Arc::new(RecordingObjects::default());
        let videos = Arc::new(InMemoryVideoStore::new());
        let state = AppState::from_parts(
            config,
            videos.clone(),
            objects.clone(),
            Arc::new(CopyRemuxer),
            Arc::new(FixedInspector(AspectClassification::Landscape)),
        );

        Self {
            router: create_router(state.clone(), None),
            state,
            objects,
            videos,
            temp_dir,
            assets_dir,
        }
    }

    /// Files left in the upload temp directory.
    pub fn leftover_files(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path()).unwrap().count()
    }
}

pub fn token_for(user_id: Uuid) -> String {
    issue_token(SECRET, user_id, Duration::from_secs(3600)).unwrap()
}

/// A multipart body with one file part.
pub fn multipart_body(field: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    write!(
        body,
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"boots.mp4\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .unwrap();
    body.extend_from_slice(data);
    write!(body, "\r\n--{BOUNDARY}--\r\n").unwrap();
    body
}

pub fn upload_request(video_id: &str, token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/api/videos/{video_id}/upload"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
