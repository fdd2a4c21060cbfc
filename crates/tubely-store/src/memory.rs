//! In-process video store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use tubely_models::{VideoId, VideoRecord};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::VideoStore;

/// Video records held in memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryVideoStore {
    videos: RwLock<HashMap<VideoId, VideoRecord>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn create_video(&self, record: &VideoRecord) -> StoreResult<()> {
        let mut videos = self.videos.write().await;
        if videos.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        videos.insert(record.id, record.clone());
        debug!(video_id = %record.id, user_id = %record.user_id, "Created video");
        Ok(())
    }

    async fn get_video(&self, id: &VideoId) -> StoreResult<Option<VideoRecord>> {
        Ok(self.videos.read().await.get(id).cloned())
    }

    async fn update_video(&self, record: &VideoRecord) -> StoreResult<()> {
        let mut videos = self.videos.write().await;
        match videos.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                debug!(video_id = %record.id, "Updated video");
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id)),
        }
    }

    async fn list_videos(&self, user_id: &Uuid) -> StoreResult<Vec<VideoRecord>> {
        let mut videos: Vec<VideoRecord> = self
            .videos
            .read()
            .await
            .values()
            .filter(|v| v.is_owned_by(user_id))
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }
}
