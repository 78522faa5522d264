// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use jshint_jskit::cli::{LintArgs, OutputFormat};
use jshint_jskit::error::ExitCode;
use jshint_jskit::input::Buffer;
use jshint_jskit::lint::Linter;
use jshint_jskit::output::LintReport;
use jshint_jskit::output::json::JsonFormatter;
use jshint_jskit::output::text::TextFormatter;

/// Run the lint command.
pub fn run(args: &LintArgs) -> anyhow::Result<ExitCode> {
    let buffer = Buffer::read(args.input.file(), args.input.stdin_filename.as_deref())?;
    let linter = Linter::new(args.tools.settings());

    tracing::trace!("lint command starting");
    let diagnostics = linter.lint(&buffer.text, buffer.file.as_deref())?;
    let report = LintReport::new(buffer.file.as_deref(), diagnostics);

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(args.color_mode().resolve()).write(&report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
        }
    }

    Ok(if report.passed {
        ExitCode::Success
    } else {
        ExitCode::LintFailed
    })
}
