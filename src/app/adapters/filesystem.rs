//! Filesystem adapter for upload intake.
//!
//! Spools uploaded bytes into a scoped temporary file. The file is removed on
//! every exit path (success, validation failure, panic unwind) via RAII, so
//! callers never leak partial uploads.

use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// A temporary upload spooled to disk for the duration of one analysis request
#[derive(Debug)]
pub struct TempUpload {
    file: NamedTempFile,
    original_name: String,
}

impl TempUpload {
    /// Spool raw upload bytes into a temporary file
    pub fn from_bytes(bytes: &[u8], original_name: &str) -> Result<Self> {
        let mut file = NamedTempFile::new()
            .map_err(|e| Error::io("failed to create temporary upload file", e))?;
        file.write_all(bytes)
            .map_err(|e| Error::io("failed to spool upload to temporary file", e))?;
        file.flush()
            .map_err(|e| Error::io("failed to flush temporary upload file", e))?;

        debug!(
            "Spooled upload '{}' ({} bytes) to {}",
            original_name,
            bytes.len(),
            file.path().display()
        );

        Ok(Self {
            file,
            original_name: original_name.to_string(),
        })
    }

    /// Path of the spooled file, valid until this value is dropped
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Filename the upload arrived with
    pub fn original_name(&self) -> &str {
        &self.original_name
    }
}
