//! Asset key generation.
//!
//! Keys have the form `<classification>/<random-name><extension>` where the
//! random name is 32 bytes from the thread-local CSPRNG, URL-safe base64
//! encoded without padding.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use tubely_models::AspectClassification;

/// Random bytes per generated name.
const NAME_BYTES: usize = 32;

/// Extension used when a media type is not of the form `type/subtype`.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// File extension for a media type: `video/mp4` -> `.mp4`.
pub fn extension_of(media_type: &str) -> String {
    match media_type.split_once('/') {
        Some((_, subtype)) if !subtype.contains('/') => format!(".{}", subtype),
        _ => FALLBACK_EXTENSION.to_string(),
    }
}

/// Random, URL-safe file name carrying the extension of `media_type`.
pub fn asset_file_name(media_type: &str) -> String {
    let mut bytes = [0u8; NAME_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    format!("{}{}", URL_SAFE_NO_PAD.encode(bytes), extension_of(media_type))
}

/// Storage key for one published upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    /// Mint a fresh key under the classification's namespace.
    pub fn generate(classification: AspectClassification, media_type: &str) -> Self {
        Self(format!(
            "{}/{}",
            classification.as_str(),
            asset_file_name(media_type)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
