// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `globals` and `config` commands: show what a lint pass would hand jshint.

use jshint_jskit::cli::BufferArgs;
use jshint_jskit::config::synthesize;
use jshint_jskit::error::ExitCode;
use jshint_jskit::globals::resolve_globals;
use jshint_jskit::input::Buffer;
use jshint_jskit::lint::{Linter, current_dir};

/// Print one resolved global per line.
pub fn run_globals(args: &BufferArgs) -> anyhow::Result<ExitCode> {
    for name in globals(args)?.1 {
        println!("{name}");
    }
    Ok(ExitCode::Success)
}

/// Print the synthesized jshint configuration.
pub fn run_config(args: &BufferArgs) -> anyhow::Result<ExitCode> {
    let (target, names) = globals(args)?;
    let config = synthesize(&target, &names)?;
    println!("{}", config.to_pretty_string());
    Ok(ExitCode::Success)
}

fn globals(args: &BufferArgs) -> anyhow::Result<(std::path::PathBuf, Vec<String>)> {
    let buffer = Buffer::read(args.input.file(), args.input.stdin_filename.as_deref())?;
    let linter = Linter::new(args.tools.settings());
    let (working_dir, target) = linter.locate(&current_dir()?, buffer.file.as_deref());
    let names = resolve_globals(linter.settings(), &working_dir, &target, &buffer.text)?;
    Ok((target, names))
}
