//! API configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tubely_storage::{StorageConfig, StorageError};

/// Default cap on an upload request body (1 GiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1 << 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// API server configuration. Read once at startup, immutable afterwards.
#[derive(Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_upload_bytes: usize,
    /// HS256 secret for bearer tokens
    pub jwt_secret: String,
    /// Directory served under /assets
    pub assets_root: PathBuf,
    /// Directory for staged uploads and remux output
    pub upload_temp_dir: PathBuf,
    pub ffmpeg_timeout: Duration,
    pub ffprobe_timeout: Duration,
    pub storage: StorageConfig,
}

impl ApiConfig {
    /// Config with defaults for everything except the secret and storage.
    pub fn new(jwt_secret: impl Into<String>, storage: StorageConfig) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8091,
            cors_origins: vec!["*".to_string()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            jwt_secret: jwt_secret.into(),
            assets_root: PathBuf::from("./assets"),
            upload_temp_dir: std::env::temp_dir(),
            ffmpeg_timeout: Duration::from_secs(600),
            ffprobe_timeout: Duration::from_secs(30),
            storage,
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let defaults = Self::new(jwt_secret, StorageConfig::from_env()?);

        Ok(Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: parse_env("API_PORT").unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),
            assets_root: std::env::var("ASSETS_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_root),
            upload_temp_dir: std::env::var("UPLOAD_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_temp_dir),
            ffmpeg_timeout: parse_env("FFMPEG_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.ffmpeg_timeout),
            ffprobe_timeout: parse_env("FFPROBE_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.ffprobe_timeout),
            jwt_secret: defaults.jwt_secret,
            storage: defaults.storage,
        })
    }

    /// Create the assets root if it does not exist yet.
    pub async fn ensure_assets_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.assets_root).await
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("assets_root", &self.assets_root)
            .field("upload_temp_dir", &self.upload_temp_dir)
            .field("ffmpeg_timeout", &self.ffmpeg_timeout)
            .field("ffprobe_timeout", &self.ffprobe_timeout)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
