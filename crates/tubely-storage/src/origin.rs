//! Public URLs for stored objects.

use crate::keys::AssetKey;

/// Where published objects are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicOrigin {
    /// Distribution in front of the bucket, e.g. `https://d111.cloudfront.net`
    Cdn(String),
    /// Virtual-hosted S3 bucket endpoint
    Bucket { bucket: String, region: String },
}

impl PublicOrigin {
    /// Public URL of the object stored under `key`.
    pub fn url_for(&self, key: &AssetKey) -> String {
        match self {
            PublicOrigin::Cdn(origin) => format!("{}/{}", origin.trim_end_matches('/'), key),
            PublicOrigin::Bucket { bucket, region } => {
                format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
            }
        }
    }
}
