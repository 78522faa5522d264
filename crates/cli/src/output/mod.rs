// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for lint results.

pub mod json;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::diagnostic::{Diagnostic, Severity};

/// Label used for buffers read from stdin without a filename.
pub const STDIN_LABEL: &str = "stdin";

/// Diagnostics reported for one buffer.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// ISO 8601 time the report was created.
    pub timestamp: String,
    /// Linted file, if the buffer has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// True when nothing was reported.
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    /// Create a report stamped with the current time.
    pub fn new(file: Option<&Path>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            file: file.map(Path::to_path_buf),
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }

    /// File path for display, or the stdin label.
    pub fn label(&self) -> String {
        match &self.file {
            Some(file) => file.display().to_string(),
            None => STDIN_LABEL.to_string(),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
