// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process invocation with text piped through stdin.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::{Error, Result};

/// Run `command` in `cwd`, writing `input` to its stdin.
///
/// Stdin is fed from a separate thread and closed once written, while both
/// output pipes are drained until the process exits. There is no timeout.
pub fn run_with_stdin(command: &[String], cwd: &Path, input: &str) -> Result<Output> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Argument("empty command".to_string()));
    };

    tracing::debug!("spawning {} in {}", command.join(" "), cwd.display());

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::ProcessSpawn {
            program: program.clone(),
            source,
        })?;

    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.as_bytes().to_vec();
        std::thread::spawn(move || -> io::Result<()> {
            match stdin.write_all(&input) {
                // Tool exited without reading all of stdin.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        })
    });

    let output = child.wait_with_output().map_err(|source| Error::Io {
        path: cwd.to_path_buf(),
        source,
    })?;

    if let Some(handle) = writer {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::debug!("failed writing stdin of {program}: {e}"),
            Err(_) => tracing::debug!("stdin writer for {program} panicked"),
        }
    }

    tracing::trace!(
        "{program} exited with {} ({} bytes stdout, {} bytes stderr)",
        output.status,
        output.stdout.len(),
        output.stderr.len()
    );

    Ok(output)
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
