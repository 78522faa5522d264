// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `.jshintrc` discovery.
//!
//! Walks from a directory up through its ancestors looking for the nearest
//! `.jshintrc`, the same lookup jshint itself performs.

use std::path::{Path, PathBuf};

/// Basename of the jshint configuration file.
pub const JSHINTRC: &str = ".jshintrc";

/// Find the nearest `.jshintrc` starting from `start_dir`.
///
/// Stops once the parent of the current directory is the directory itself
/// (or there is no parent), i.e. at the filesystem root for absolute paths.
pub fn find_jshintrc(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(JSHINTRC);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
