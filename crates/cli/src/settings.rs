// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter settings: which executables to run and how.

use std::path::{Path, PathBuf};

/// Default lint command.
pub const DEFAULT_JSHINT: &[&str] = &["jshint"];

/// Default globals helper command, run through npx without installing.
pub const DEFAULT_JSKIT: &[&str] = &["npx", "--no-install", "jskit"];

/// Delimiter requested from the globals helper.
pub const DEFAULT_DELIMITER: char = ',';

/// How the adapter invokes jshint and the JSKit globals helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lint command prefix.
    pub jshint: Vec<String>,
    /// Globals helper command prefix.
    pub jskit: Vec<String>,
    /// Single-character delimiter for the helper's output.
    pub delimiter: char,
    /// Extra arguments passed to jshint before the stdin marker.
    pub args: Vec<String>,
    /// Working directory override for both processes.
    pub working_dir: Option<PathBuf>,
    /// Lint only when enabled.
    pub enable: bool,
    /// Prefer a project-local `node_modules/.bin/jshint` over the bare command.
    pub prefer_local: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jshint: to_strings(DEFAULT_JSHINT),
            jskit: to_strings(DEFAULT_JSKIT),
            delimiter: DEFAULT_DELIMITER,
            args: Vec::new(),
            working_dir: None,
            enable: true,
            prefer_local: true,
        }
    }
}

impl Settings {
    /// Resolve the lint command for a run rooted at `working_dir`.
    ///
    /// A bare `jshint` is swapped for the nearest project-local binary when
    /// `prefer_local` is set and one exists.
    pub fn lint_command(&self, working_dir: &Path) -> Vec<String> {
        if self.prefer_local
            && let [program] = self.jshint.as_slice()
            && program == "jshint"
            && let Some(local) = find_local_bin(working_dir, program)
        {
            tracing::debug!("using project-local jshint at {}", local.display());
            return vec![local.to_string_lossy().into_owned()];
        }
        self.jshint.clone()
    }
}

/// Split a command string on whitespace into program and arguments.
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(String::from).collect()
}

/// Find `node_modules/.bin/<name>` in `start` or its nearest ancestor.
pub fn find_local_bin(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("node_modules").join(".bin").join(name))
        .find(|candidate| candidate.is_file())
}

fn to_strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
