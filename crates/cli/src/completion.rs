// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TestKit assertion completions.
//!
//! Offered only in JavaScript code (outside comments and strings) of buffers
//! that `// #import TestKit` near the top, when the typed prefix is `t`.

use std::collections::BTreeSet;

use serde::Serialize;

/// Import directive recognized at the start of a line.
pub const IMPORT_MARKER: &str = "// #import ";

/// Module whose import enables assertion completions.
pub const TESTKIT_MODULE: &str = "TestKit";

/// Only this many leading characters are scanned for imports.
pub const IMPORT_SCAN_LIMIT: usize = 1024;

/// A completion trigger and its snippet expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub trigger: &'static str,
    pub template: &'static str,
}

const fn completion(trigger: &'static str, template: &'static str) -> Completion {
    Completion { trigger, template }
}

/// TestKit assertion snippets.
pub const ASSERTIONS: &[Completion] = &[
    completion("TKAssert", "TKAssert(${1:condition});"),
    completion("TKAssertEquals", "TKAssertEquals(${1:result}, ${2:expected});"),
    completion("TKAssertNotEquals", "TKAssertNotEquals(${1:result}, ${2:expected});"),
    completion("TKAssertFloatEquals", "TKAssertFloatEquals(${1:result}, ${2:expected});"),
    completion("TKAssertExactEquals", "TKAssertExactEquals(${1:result}, ${2:expected});"),
    completion(
        "TKAssertNotExactEquals",
        "TKAssertNotExactEquals(${1:result}, ${2:expected});",
    ),
    completion("TKAssertObjectEquals", "TKAssertObjectEquals(${1:result}, ${2:expected});"),
    completion(
        "TKAssertNotObjectEquals",
        "TKAssertNotObjectEquals(${1:result}, ${2:expected});",
    ),
    completion("TKAssertNotNull", "TKAssertNotNull(${1:value});"),
    completion("TKAssertNull", "TKAssertNull(${1:value});"),
    completion("TKAssertNotUndefined", "TKAssertNotUndefined(${1:value});"),
    completion("TKAssertUndefined", "TKAssertUndefined(${1:value});"),
    completion("TKAssertThrows", "TKAssertThrows(function(){\n\t$1\n});"),
    completion("TKAssertLessThan", "TKAssertLessThan(${1:result}, ${2:expected});"),
    completion(
        "TKAssertLessThanOrEquals",
        "TKAssertLessThanOrEquals(${1:result}, ${2:expected});",
    ),
    completion("TKAssertGreaterThan", "TKAssertGreaterThan(${1:result}, ${2:expected});"),
    completion(
        "TKAssertGreaterThanOrEquals",
        "TKAssertGreaterThanOrEquals(${1:result}, ${2:expected});",
    ),
    completion("TKAssertArrayEquals", "TKAssertArrayEquals(${1:result}, ${2:expected});"),
];

/// What the host knows about the cursor when asking for completions.
#[derive(Debug, Clone, Copy)]
pub struct CompletionContext<'a> {
    /// Full buffer text.
    pub buffer: &'a str,
    /// Word typed before the cursor.
    pub prefix: &'a str,
    /// Cursor is in JavaScript source, outside comments and strings.
    pub in_code: bool,
}

/// Modules named by `// #import` lines near the top of `buffer`.
pub fn imports(buffer: &str) -> BTreeSet<String> {
    let head = match buffer.char_indices().nth(IMPORT_SCAN_LIMIT) {
        Some((end, _)) => &buffer[..end],
        None => buffer,
    };
    head.lines()
        .filter_map(|line| line.strip_prefix(IMPORT_MARKER))
        .map(String::from)
        .collect()
}

/// Assertion completions for `ctx`, or `None` when they do not apply.
pub fn query_completions(ctx: &CompletionContext<'_>) -> Option<&'static [Completion]> {
    if !ctx.in_code || !ctx.prefix.eq_ignore_ascii_case("t") {
        return None;
    }
    imports(ctx.buffer)
        .contains(TESTKIT_MODULE)
        .then_some(ASSERTIONS)
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
