// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jshint invocation.
//!
//! One lint pass resolves globals for the buffer, writes a synthesized
//! config to a temp file, then pipes the buffer through `jshint --verbose`.
//! The two processes run strictly one after the other.

use std::path::{Path, PathBuf};

use crate::config::synthesize_config;
use crate::diagnostic::{Diagnostic, parse_output};
use crate::error::{Error, Result};
use crate::globals::resolve_globals;
use crate::process::run_with_stdin;
use crate::settings::Settings;
use crate::temp::TempConfigFile;

/// Filename used for buffers that were never saved.
///
/// jshint's own config lookup is driven by the filename, so unsaved buffers
/// still need a plausible path inside the project.
pub const UNSAVED_FILENAME: &str = "filename.js";

/// Runs jshint with JSKit-aware configuration.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    settings: Settings,
}

impl Linter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lint `code`, optionally saved at `file`.
    ///
    /// Returns no diagnostics without spawning anything when disabled.
    pub fn lint(&self, code: &str, file: Option<&Path>) -> Result<Vec<Diagnostic>> {
        self.lint_from(&current_dir()?, code, file)
    }

    /// Like [`Linter::lint`], with relative paths resolved against `cwd`.
    pub fn lint_from(
        &self,
        cwd: &Path,
        code: &str,
        file: Option<&Path>,
    ) -> Result<Vec<Diagnostic>> {
        if !self.settings.enable {
            tracing::debug!("linting disabled");
            return Ok(Vec::new());
        }
        let output = self.invoke_from(cwd, code, file)?;
        let diagnostics = parse_output(&output);
        tracing::debug!("parsed {} diagnostics", diagnostics.len());
        Ok(diagnostics)
    }

    /// Run one lint pass and return jshint's raw stdout.
    pub fn invoke(&self, code: &str, file: Option<&Path>) -> Result<String> {
        self.invoke_from(&current_dir()?, code, file)
    }

    /// Like [`Linter::invoke`], with relative paths resolved against `cwd`.
    pub fn invoke_from(&self, cwd: &Path, code: &str, file: Option<&Path>) -> Result<String> {
        let (working_dir, target) = self.locate(cwd, file);

        let globals = resolve_globals(&self.settings, &working_dir, &target, code)?;
        let config = synthesize_config(&target, &globals)?;

        let mut temp = TempConfigFile::new()?;
        temp.write_all(&config)?;

        let command = self.lint_command(&working_dir, &target, temp.path());
        let output = run_with_stdin(&command, &working_dir, code);
        temp.close();
        let output = output?;

        if !output.stderr.is_empty() {
            tracing::debug!(
                "jshint stderr ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Build the full jshint command line.
    pub fn lint_command(&self, working_dir: &Path, target: &Path, config: &Path) -> Vec<String> {
        let mut command = self.settings.lint_command(working_dir);
        command.extend([
            "--verbose".to_string(),
            "--filename".to_string(),
            target.to_string_lossy().into_owned(),
            "--config".to_string(),
            config.to_string_lossy().into_owned(),
        ]);
        command.extend(self.settings.args.iter().cloned());
        command.push("-".to_string());
        command
    }

    /// Working directory and target file for a pass, both anchored at `cwd`.
    ///
    /// The working directory is the configured one, else the file's
    /// directory, else `cwd`. Children run inside it, so every path handed
    /// to them must not depend on the caller's cwd.
    pub fn locate(&self, cwd: &Path, file: Option<&Path>) -> (PathBuf, PathBuf) {
        let file = file.map(|path| cwd.join(path));
        let working_dir = match (&self.settings.working_dir, file.as_deref()) {
            (Some(dir), _) => cwd.join(dir),
            (None, Some(file)) => file.parent().unwrap_or(cwd).to_path_buf(),
            (None, None) => cwd.to_path_buf(),
        };
        let target = target_file(file.as_deref(), &working_dir);
        (working_dir, target)
    }
}

/// The process cwd, used to anchor relative paths.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| Error::Io {
        path: PathBuf::from("."),
        source,
    })
}

/// The real file, or a stand-in under `working_dir` for unsaved buffers.
pub fn target_file(file: Option<&Path>, working_dir: &Path) -> PathBuf {
    match file {
        Some(path) => path.to_path_buf(),
        None => working_dir.join(UNSAVED_FILENAME),
    }
}

/// Lint `source` with default settings.
pub fn lint(source: &str, file_path: Option<&Path>) -> Result<Vec<Diagnostic>> {
    Linter::default().lint(source, file_path)
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
