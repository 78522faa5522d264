// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jshint-jskit CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use jshint_jskit::cli::{Cli, Command};
use jshint_jskit::error::ExitCode;

mod cmd_complete;
mod cmd_lint;
mod cmd_tools;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("JSHINT_JSKIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jshint-jskit: {}", e);
            match e.downcast_ref::<jshint_jskit::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Lint(args)) => cmd_lint::run(args),
        Some(Command::Globals(args)) => cmd_tools::run_globals(args),
        Some(Command::Config(args)) => cmd_tools::run_config(args),
        Some(Command::Complete(args)) => cmd_complete::run(args),
    }
}
