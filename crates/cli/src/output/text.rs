//! Text output formatter.
//!
//! ```text
//! <file>:<line>:<col>: <severity> <code> <message>
//! <N> problems (<E> errors, <W> warnings)
//! ```
//!
//! Positions are printed 1-based.

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::LintReport;
use crate::color::scheme;
use crate::diagnostic::{Diagnostic, Severity};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write all diagnostics followed by the summary line.
    ///
    /// Silent when the report passed.
    pub fn write(&mut self, report: &LintReport) -> std::io::Result<()> {
        let label = report.label();
        for diagnostic in &report.diagnostics {
            self.write_diagnostic(&label, diagnostic)?;
        }
        if !report.passed {
            self.write_summary(report)?;
        }
        self.writer.flush()
    }

    fn write_diagnostic(&mut self, label: &str, d: &Diagnostic) -> std::io::Result<()> {
        self.writer.set_color(&scheme::path())?;
        write!(self.writer, "{label}")?;
        self.writer.reset()?;
        write!(self.writer, ":{}:{}: ", d.line + 1, d.column + 1)?;

        let spec = match d.severity {
            Severity::Error => scheme::error(),
            Severity::Warning => scheme::warning(),
        };
        self.writer.set_color(&spec)?;
        write!(self.writer, "{}", d.severity)?;
        self.writer.reset()?;

        write!(self.writer, " ")?;
        self.writer.set_color(&scheme::code())?;
        write!(self.writer, "{}", d.code)?;
        self.writer.reset()?;
        writeln!(self.writer, " {}", d.message)
    }

    fn write_summary(&mut self, report: &LintReport) -> std::io::Result<()> {
        let total = report.diagnostics.len();
        let errors = report.count(Severity::Error);
        let warnings = report.count(Severity::Warning);

        self.writer.set_color(&scheme::summary())?;
        writeln!(
            self.writer,
            "{} problem{} ({} error{}, {} warning{})",
            total,
            plural(total),
            errors,
            plural(errors),
            warnings,
            plural(warnings),
        )?;
        self.writer.reset()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
