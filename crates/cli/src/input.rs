// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading the buffer to lint from a file or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Buffer text and the path it belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub text: String,
    pub file: Option<PathBuf>,
}

impl Buffer {
    /// Read `file`, or stdin when `file` is None.
    ///
    /// `stdin_filename` names the buffer when it comes from stdin.
    pub fn read(file: Option<&Path>, stdin_filename: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::from_reader(std::io::stdin().lock(), stdin_filename),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            text,
            file: Some(path.to_path_buf()),
        })
    }

    pub fn from_reader<R: Read>(mut reader: R, file: Option<&Path>) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        Ok(Self {
            text,
            file: file.map(Path::to_path_buf),
        })
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
