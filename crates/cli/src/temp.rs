// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped temporary file holding the synthesized jshint configuration.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A uniquely named temporary config file, removed exactly once.
///
/// Removal happens on [`TempConfigFile::close`] or on drop, whichever comes
/// first; later calls are no-ops and removal failures are only logged.
#[derive(Debug)]
pub struct TempConfigFile {
    file: Option<NamedTempFile>,
    path: PathBuf,
}

impl TempConfigFile {
    /// Create the file exclusively under the system temp directory.
    pub fn new() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("jshint-jskit-")
            .suffix(".json")
            .tempfile()
            .map_err(|source| Error::Io {
                path: std::env::temp_dir(),
                source,
            })?;
        let path = file.path().to_path_buf();
        tracing::debug!("created temp config {}", path.display());
        Ok(Self {
            file: Some(file),
            path,
        })
    }

    /// Path of the file, valid until it is closed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has already been removed.
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    /// Write `bytes` and flush them to disk.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Err(Error::Io {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "temp config closed"),
            });
        };
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Close and remove the file. Does nothing once already closed.
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            match file.close() {
                Ok(()) => tracing::debug!("removed temp config {}", self.path.display()),
                Err(e) => tracing::debug!(
                    "ignoring failure removing {}: {e}",
                    self.path.display()
                ),
            }
        }
    }
}

impl Drop for TempConfigFile {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "temp_tests.rs"]
mod tests;
