//! Object storage for published videos.
//!
//! This crate provides:
//! - The [`ObjectStore`] seam the upload pipeline writes through
//! - An S3 client implementation (AWS or any S3-compatible endpoint)
//! - Collision-resistant asset keys namespaced by aspect classification
//! - Public URL construction for CDN or bucket origins

pub mod backend;
pub mod client;
pub mod error;
pub mod keys;
pub mod origin;

pub use backend::ObjectStore;
pub use client::{S3Client, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use keys::{asset_file_name, extension_of, AssetKey};
pub use origin::PublicOrigin;
