// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jshint `--verbose` output parsing.
//!
//! Each diagnostic line has the shape
//! `<label>: line <N>, col <C>, <message> (<CODE>)`. Positions are converted
//! to 0-based values and, for a handful of warnings, the offending token is
//! extracted from the message to give the diagnostic a highlighted span.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A full diagnostic line. The message is greedy, so the last parenthesized
/// code on the line wins.
#[allow(clippy::expect_used)]
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^.+?: line (?P<line>\d+), col (?P<col>\d+), (?P<message>.+) \((?:(?P<error>E\d+)|(?P<warning>W\d+))\)",
    )
    .expect("valid regex")
});

/// Last quoted token ending the message, e.g. `saw '=='.`
#[allow(clippy::expect_used)]
static QUOTED_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+'(?P<token>.+)'\.$").expect("valid regex"));

/// Last quoted token followed by more text, e.g. `'foo_bar' is not ...`
#[allow(clippy::expect_used)]
static QUOTED_INNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+'(?P<token>.+)'.+$").expect("valid regex"));

/// Diagnostic severity, derived from the code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single jshint diagnostic with 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 0-based line.
    pub line: usize,
    /// 0-based column of the highlighted span start.
    pub column: usize,
    /// Offending text; its length is the highlighted span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<String>,
    pub severity: Severity,
    /// jshint code such as `W033` or `E019`.
    pub code: String,
    pub message: String,
}

impl Diagnostic {
    /// Highlighted span length in characters (0 without `near`).
    pub fn length(&self) -> usize {
        self.near.as_ref().map_or(0, |near| near.chars().count())
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Where the offending token sits in a warning message.
#[derive(Debug, Clone, Copy)]
enum TokenPosition {
    AtEnd,
    Inner,
}

/// How the token moves the reported column.
#[derive(Debug, Clone, Copy)]
enum ColumnShift {
    Keep,
    /// jshint reports the column just past the token.
    TokenLength,
    /// Only `==` and `!=` are reported past the token.
    ComparisonOnly,
}

/// Warning codes whose messages name the offending token.
///
/// Tied to jshint's message wording; update here when that changes.
const WARNING_RULES: &[(&str, TokenPosition, ColumnShift)] = &[
    // Unexpected use of '++' etc.
    ("W016", TokenPosition::AtEnd, ColumnShift::Keep),
    // Duplicate key.
    ("W075", TokenPosition::Inner, ColumnShift::TokenLength),
    // Identifier not in camel case.
    ("W106", TokenPosition::Inner, ColumnShift::TokenLength),
    // Expected '===' and instead saw '=='; also missing curly braces.
    ("W116", TokenPosition::AtEnd, ColumnShift::ComparisonOnly),
];

/// Parse one line of jshint output.
///
/// Returns `None` for lines that are not diagnostics (banners, summaries).
pub fn parse_line(line: &str) -> Option<Diagnostic> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = LINE_PATTERN.captures(line)?;

    let raw_line: usize = caps.name("line")?.as_str().parse().ok()?;
    let raw_col: usize = caps.name("col")?.as_str().parse().ok()?;
    let message = caps.name("message")?.as_str();

    // Raw values are 1-based; line 0 would otherwise land at end of file.
    let line_no = raw_line.saturating_sub(1);
    let mut column = raw_col.saturating_sub(1);
    let mut near = None;

    let (severity, code) = match (caps.name("error"), caps.name("warning")) {
        (Some(error), _) => (Severity::Error, error.as_str()),
        (None, Some(warning)) => (Severity::Warning, warning.as_str()),
        (None, None) => return None,
    };

    if severity == Severity::Warning
        && let Some(&(_, position, shift)) = WARNING_RULES.iter().find(|(c, _, _)| *c == code)
        && let Some(token) = offending_token(message, position)
    {
        let shifted = match shift {
            ColumnShift::Keep => false,
            ColumnShift::TokenLength => true,
            ColumnShift::ComparisonOnly => token == "==" || token == "!=",
        };
        if shifted {
            column = column.saturating_sub(token.chars().count());
        }
        near = Some(token.to_string());
    }

    Some(Diagnostic {
        line: line_no,
        column,
        near,
        severity,
        code: code.to_string(),
        message: message.to_string(),
    })
}

/// Parse every diagnostic line of jshint output, skipping the rest.
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output.lines().filter_map(parse_line).collect()
}

fn offending_token(message: &str, position: TokenPosition) -> Option<&str> {
    let pattern = match position {
        TokenPosition::AtEnd => &*QUOTED_AT_END,
        TokenPosition::Inner => &*QUOTED_INNER,
    };
    pattern
        .captures(message)
        .and_then(|caps| caps.name("token"))
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
