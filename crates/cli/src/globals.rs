// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global identifier resolution through the JSKit helper.
//!
//! Runs `jskit globals --frameworks` on the buffer and turns its
//! delimiter-joined output into the names jshint should treat as declared.

use std::path::Path;

use crate::error::{Error, Result};
use crate::process::run_with_stdin;
use crate::settings::Settings;

/// Build the globals helper command for `file_path`.
pub fn globals_command(settings: &Settings, file_path: &Path) -> Vec<String> {
    let mut command = settings.jskit.clone();
    command.extend([
        "globals".to_string(),
        "--frameworks".to_string(),
        "--delimiter".to_string(),
        settings.delimiter.to_string(),
        "--filename".to_string(),
        file_path.to_string_lossy().into_owned(),
        "-".to_string(),
    ]);
    command
}

/// Resolve the globals visible to `source`, as written at `file_path`.
///
/// Fails with [`Error::ToolInvocation`] carrying the helper's stderr when it
/// exits unsuccessfully.
pub fn resolve_globals(
    settings: &Settings,
    working_dir: &Path,
    file_path: &Path,
    source: &str,
) -> Result<Vec<String>> {
    let command = globals_command(settings, file_path);
    let output = run_with_stdin(&command, working_dir, source)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::debug!("globals helper failed ({}): {stderr}", output.status);
        return Err(Error::ToolInvocation {
            tool: command.join(" "),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names = split_globals(&stdout, settings.delimiter);
    tracing::debug!("resolved {} globals", names.len());
    Ok(names)
}

/// Split helper output on `delimiter`, keeping empty entries.
pub fn split_globals(output: &str, delimiter: char) -> Vec<String> {
    output.split(delimiter).map(String::from).collect()
}

#[cfg(test)]
#[path = "globals_tests.rs"]
mod tests;
