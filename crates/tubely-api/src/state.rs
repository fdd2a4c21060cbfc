//! Application state.

use std::sync::Arc;

use tracing::info;
use tubely_media::{FfmpegRemuxer, FfprobeInspector, Inspector, Remuxer};
use tubely_storage::{ObjectStore, S3Client};
use tubely_store::{InMemoryVideoStore, VideoStore};

use crate::auth::JwtVerifier;
use crate::config::ApiConfig;
use crate::services::{UploadConfig, UploadPipeline};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub videos: Arc<dyn VideoStore>,
    pub storage: Arc<dyn ObjectStore>,
    pub uploads: Arc<UploadPipeline>,
    pub jwt: Arc<JwtVerifier>,
}

impl AppState {
    /// Create new application state.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let storage = S3Client::new(&config.storage).await?;
        info!(bucket = %storage.bucket(), "Object storage client ready");
        let remuxer = FfmpegRemuxer::new().with_timeout(config.ffmpeg_timeout);
        let inspector = FfprobeInspector::new().with_timeout(config.ffprobe_timeout);

        Ok(Self::from_parts(
            config,
            Arc::new(InMemoryVideoStore::new()),
            Arc::new(storage),
            Arc::new(remuxer),
            Arc::new(inspector),
        ))
    }

    /// Assemble state from already constructed collaborators.
    pub fn from_parts(
        config: ApiConfig,
        videos: Arc<dyn VideoStore>,
        storage: Arc<dyn ObjectStore>,
        remuxer: Arc<dyn Remuxer>,
        inspector: Arc<dyn Inspector>,
    ) -> Self {
        let uploads = UploadPipeline::new(
            UploadConfig {
                temp_dir: config.upload_temp_dir.clone(),
                origin: config.storage.public_origin(),
            },
            Arc::clone(&videos),
            Arc::clone(&storage),
            remuxer,
            inspector,
        );

        Self {
            jwt: Arc::new(JwtVerifier::new(&config.jwt_secret)),
            config,
            videos,
            storage,
            uploads: Arc::new(uploads),
        }
    }
}
