//! Video record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a video record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub Uuid);

/// Returned when a path segment is not a valid video ID.
#[derive(Debug, Error)]
#[error("invalid video ID: {0}")]
pub struct InvalidVideoId(String);

impl VideoId {
    /// Generate a new random video ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a video ID from its textual UUID form.
    pub fn parse(s: &str) -> Result<Self, InvalidVideoId> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidVideoId(s.to_string()))
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for VideoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Fields supplied when creating a draft video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Video record as held by the metadata store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Unique video ID
    pub id: VideoId,

    /// Owning user
    pub user_id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Public URL of the published video, set by a successful upload
    pub video_url: Option<String>,

    pub thumbnail_url: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl VideoRecord {
    /// Create a draft record with no media attached.
    pub fn new(user_id: Uuid, video: NewVideo) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::new(),
            user_id,
            title: video.title,
            description: video.description,
            video_url: None,
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        &self.user_id == user_id
    }

    /// Point the record at newly published media.
    pub fn set_video_url(&mut self, url: impl Into<String>) {
        self.video_url = Some(url.into());
        self.updated_at = Utc::now();
    }
}
