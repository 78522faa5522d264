// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jshint configuration loading and synthesis.
//!
//! The nearest `.jshintrc` is read as a loosely-typed JSON object. Every key
//! passes through untouched except `predef`, which receives the globals
//! resolved for the file being linted.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::discovery::find_jshintrc;
use crate::error::{Error, Result};

/// Key holding jshint's predefined identifiers.
pub const PREDEF_KEY: &str = "predef";

/// An insertion-ordered jshint configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintConfig {
    doc: Map<String, Value>,
}

impl LintConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `.jshintrc` nearest to `start_dir`.
    ///
    /// Returns an empty document when no ancestor holds one.
    pub fn load(start_dir: &Path) -> Result<Self> {
        match find_jshintrc(start_dir) {
            Some(path) => {
                tracing::debug!("loading jshint config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                tracing::debug!(
                    "no .jshintrc above {}, using empty config",
                    start_dir.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse configuration text. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let doc = serde_json::from_str::<Map<String, Value>>(content).map_err(|source| {
            Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self { doc })
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    /// Whether the document has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.doc.keys().map(String::as_str)
    }

    /// Names currently predefined, in document order.
    ///
    /// Handles both the array form and jshint's `{ "name": bool }` form.
    pub fn predefs(&self) -> Vec<&str> {
        match self.doc.get(PREDEF_KEY) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::Object(map)) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Append names to `predef`, creating it when absent.
    ///
    /// The array form keeps duplicates and order. The object form only gains
    /// names it does not already declare, as read-only globals.
    pub fn append_predefs<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into);
        let entry = self
            .doc
            .entry(PREDEF_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));

        match entry {
            Value::Array(items) => items.extend(names.map(Value::String)),
            Value::Object(map) => {
                for name in names {
                    map.entry(name).or_insert(Value::Bool(false));
                }
            }
            other => {
                tracing::warn!("replacing non-list `predef` value: {other}");
                *other = Value::Array(names.map(Value::String).collect());
            }
        }
    }

    /// Serialize as compact UTF-8 JSON.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Serialize as indented JSON.
    pub fn to_pretty_string(&self) -> String {
        format!("{:#}", Value::Object(self.doc.clone()))
    }
}

impl fmt::Display for LintConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.doc).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Load the `.jshintrc` nearest to `file_path`'s directory and append
/// `globals` to its predefined identifiers.
pub fn synthesize(file_path: &Path, globals: &[String]) -> Result<LintConfig> {
    let dir = file_path.parent().unwrap_or(Path::new(""));
    let mut config = LintConfig::load(dir)?;
    config.append_predefs(globals.iter().cloned());
    Ok(config)
}

/// Build the configuration bytes handed to jshint for `file_path`.
pub fn synthesize_config(file_path: &Path, globals: &[String]) -> Result<Vec<u8>> {
    let config = synthesize(file_path, globals)?;
    tracing::trace!("synthesized config: {config}");
    Ok(config.to_bytes())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
