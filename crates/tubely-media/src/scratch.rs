//! Request-scoped scratch files.
//!
//! A [`ScratchFile`] owns a uniquely named file on local disk. It is removed
//! either explicitly through [`ScratchFile::release`] or, on any other exit
//! path (early return, panic, dropped future), when the value is dropped.

use std::fs::File;
use std::io;
use std::path::Path;

use tempfile::TempPath;

/// A temporary file deleted when released or dropped.
#[derive(Debug)]
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// Create an empty, randomly named file in `dir`.
    ///
    /// Returns the guard together with an open write handle.
    pub fn create_in(dir: &Path, prefix: &str, suffix: &str) -> io::Result<(Self, File)> {
        let (file, path) = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(dir)?
            .into_parts();

        Ok((Self { path }, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now, reporting any failure.
    pub fn release(self) -> io::Result<()> {
        self.path.close()
    }
}

impl AsRef<Path> for ScratchFile {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
