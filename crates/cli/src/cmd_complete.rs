// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Complete command implementation.

use jshint_jskit::cli::CompleteArgs;
use jshint_jskit::completion::{CompletionContext, query_completions};
use jshint_jskit::error::ExitCode;
use jshint_jskit::input::Buffer;

/// Print `trigger<TAB>template` per completion, newlines escaped.
pub fn run(args: &CompleteArgs) -> anyhow::Result<ExitCode> {
    let buffer = Buffer::read(args.input.file(), args.input.stdin_filename.as_deref())?;
    let ctx = CompletionContext {
        buffer: &buffer.text,
        prefix: &args.prefix,
        in_code: !args.outside_code,
    };

    for completion in query_completions(&ctx).unwrap_or_default() {
        let template = completion.template.replace('\n', "\\n").replace('\t', "\\t");
        println!("{}\t{}", completion.trigger, template);
    }
    Ok(ExitCode::Success)
}
