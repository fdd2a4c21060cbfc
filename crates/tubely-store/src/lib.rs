//! Video metadata store.
//!
//! The [`VideoStore`] trait is the seam between request handlers and whatever
//! database holds video records. [`InMemoryVideoStore`] backs the default
//! server and the test suites.

pub mod error;
pub mod memory;

use async_trait::async_trait;
use tubely_models::{VideoId, VideoRecord};
use uuid::Uuid;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryVideoStore;

/// Persistence for video records.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a new record.
    async fn create_video(&self, record: &VideoRecord) -> StoreResult<()>;

    /// Fetch a record. `Ok(None)` means it does not exist.
    async fn get_video(&self, id: &VideoId) -> StoreResult<Option<VideoRecord>>;

    /// Replace an existing record.
    async fn update_video(&self, record: &VideoRecord) -> StoreResult<()>;

    /// All records owned by `user_id`, newest first.
    async fn list_videos(&self, user_id: &Uuid) -> StoreResult<Vec<VideoRecord>>;
}
