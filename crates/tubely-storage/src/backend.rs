//! Object store abstraction.

use std::path::Path;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::keys::AssetKey;

/// Destination for published media.
///
/// Implementations are bound to a single bucket at construction.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stream the file at `path` to `key`, tagged with `content_type`.
    async fn put_object(&self, key: &AssetKey, path: &Path, content_type: &str)
        -> StorageResult<()>;

    /// Verify the bucket is reachable with the configured credentials.
    async fn check_connectivity(&self) -> StorageResult<()>;
}
