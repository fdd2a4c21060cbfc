//! S3 client implementation.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use crate::backend::ObjectStore;
use crate::error::{StorageError, StorageResult};
use crate::keys::AssetKey;
use crate::origin::PublicOrigin;

/// Configuration for the S3 client.
#[derive(Clone)]
pub struct StorageConfig {
    /// Bucket name
    pub bucket: String,
    /// AWS region
    pub region: String,
    /// Public distribution origin (CDN); the bucket endpoint is used when unset
    pub cdn_origin: Option<String>,
    /// Endpoint override for S3-compatible services
    pub endpoint_url: Option<String>,
    /// Static credentials; the default AWS provider chain is used when unset
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl StorageConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        let optional = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Ok(Self {
            bucket: std::env::var("S3_BUCKET")
                .map_err(|_| StorageError::config_error("S3_BUCKET not set"))?,
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            cdn_origin: optional("S3_CDN_ORIGIN"),
            endpoint_url: optional("S3_ENDPOINT_URL"),
            access_key_id: optional("S3_ACCESS_KEY_ID"),
            secret_access_key: optional("S3_SECRET_ACCESS_KEY"),
        })
    }

    /// Origin used to build public URLs.
    pub fn public_origin(&self) -> PublicOrigin {
        match &self.cdn_origin {
            Some(origin) => PublicOrigin::Cdn(origin.clone()),
            None => PublicOrigin::Bucket {
                bucket: self.bucket.clone(),
                region: self.region.clone(),
            },
        }
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("cdn_origin", &self.cdn_origin)
            .field("endpoint_url", &self.endpoint_url)
            .field("static_credentials", &self.access_key_id.is_some())
            .finish()
    }
}

/// S3 storage client bound to one bucket.
#[derive(Clone)]
pub struct S3Client {
    client: Client,
    bucket: String,
}

impl S3Client {
    /// Create a new S3 client from configuration.
    pub async fn new(config: &StorageConfig) -> StorageResult<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        match (&config.access_key_id, &config.secret_access_key) {
            (Some(id), Some(secret)) => {
                loader = loader.credentials_provider(Credentials::new(id, secret, None, None, "static"));
            }
            (None, None) => {}
            _ => {
                return Err(StorageError::config_error(
                    "S3_ACCESS_KEY_ID and S3_SECRET_ACCESS_KEY must be set together",
                ))
            }
        }

        let sdk_config = loader.load().await;
        let mut builder = Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        key: &AssetKey,
        path: &Path,
        content_type: &str,
    ) -> StorageResult<()> {
        debug!("Uploading {} to {}", path.display(), key);
        let start = Instant::now();

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        info!(
            bucket = %self.bucket,
            key = %key,
            duration_ms = start.elapsed().as_millis() as u64,
            "Uploaded object"
        );
        Ok(())
    }

    async fn check_connectivity(&self) -> StorageResult<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| StorageError::AwsSdk(format!("S3 connectivity check failed: {}", e)))?;
        Ok(())
    }
}
