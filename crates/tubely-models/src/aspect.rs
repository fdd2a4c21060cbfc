//! Aspect ratio classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse orientation bucket used as the storage key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AspectClassification {
    Landscape,
    Portrait,
    #[default]
    Other,
}

impl AspectClassification {
    pub const ALL: &'static [AspectClassification] = &[
        AspectClassification::Landscape,
        AspectClassification::Portrait,
        AspectClassification::Other,
    ];

    /// Classify an ffprobe `display_aspect_ratio` string.
    ///
    /// Only the exact strings `16:9` and `9:16` are recognized. Numerically
    /// equivalent ratios such as `32:18` fall into `Other`.
    pub fn from_display_aspect_ratio(ratio: &str) -> Self {
        match ratio {
            "16:9" => AspectClassification::Landscape,
            "9:16" => AspectClassification::Portrait,
            _ => AspectClassification::Other,
        }
    }

    /// Key prefix for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectClassification::Landscape => "landscape",
            AspectClassification::Portrait => "portrait",
            AspectClassification::Other => "other",
        }
    }
}

impl fmt::Display for AspectClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
