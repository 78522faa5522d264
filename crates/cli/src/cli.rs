// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::settings::{Settings, split_command};

/// jshint with JSKit globals, plus TestKit assertion completions
#[derive(Parser)]
#[command(name = "jshint-jskit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint a JavaScript file or stdin
    Lint(LintArgs),
    /// Print the globals JSKit resolves for a buffer
    Globals(BufferArgs),
    /// Print the jshint configuration synthesized for a buffer
    Config(BufferArgs),
    /// Print TestKit assertion completions for a buffer
    Complete(CompleteArgs),
}

/// Where the buffer comes from.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// File to read; reads stdin when omitted or `-`
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Path of the buffer when it is read from stdin
    #[arg(long, value_name = "PATH")]
    pub stdin_filename: Option<PathBuf>,
}

impl InputArgs {
    /// The file to read, or None for stdin.
    pub fn file(&self) -> Option<&Path> {
        self.path.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// How jshint and the JSKit helper are run.
#[derive(clap::Args, Debug, Clone)]
pub struct ToolArgs {
    /// jshint command
    #[arg(
        long,
        env = "JSHINT_JSKIT_JSHINT",
        default_value = "jshint",
        value_name = "CMD"
    )]
    pub jshint: String,

    /// JSKit command used to resolve globals
    #[arg(
        long,
        env = "JSHINT_JSKIT_JSKIT",
        default_value = "npx --no-install jskit",
        value_name = "CMD"
    )]
    pub jskit: String,

    /// Delimiter requested from `jskit globals`
    #[arg(
        long,
        env = "JSHINT_JSKIT_DELIMITER",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: char,

    /// Extra argument passed to jshint (repeatable)
    #[arg(long = "jshint-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub jshint_args: Vec<String>,

    /// Working directory for both tools (default: the file's directory)
    #[arg(long, env = "JSHINT_JSKIT_WORKING_DIR", value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Report nothing without running any tool
    #[arg(long, env = "JSHINT_JSKIT_DISABLE")]
    pub disable: bool,

    /// Do not prefer a project-local node_modules/.bin/jshint
    #[arg(long)]
    pub no_local: bool,
}

impl ToolArgs {
    /// Adapter settings described by these flags.
    pub fn settings(&self) -> Settings {
        Settings {
            jshint: split_command(&self.jshint),
            jskit: split_command(&self.jskit),
            delimiter: self.delimiter,
            args: self.jshint_args.clone(),
            working_dir: self.working_dir.clone(),
            enable: !self.disable,
            prefer_local: !self.no_local,
        }
    }
}

#[derive(clap::Args)]
pub struct LintArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub tools: ToolArgs,
}

impl LintArgs {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.no_color)
    }
}

#[derive(clap::Args)]
pub struct BufferArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub tools: ToolArgs,
}

#[derive(clap::Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Word typed before the cursor
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: String,

    /// Cursor is inside a comment or string
    #[arg(long)]
    pub outside_code: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a single-character delimiter.
fn parse_delimiter(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
