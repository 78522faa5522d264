//! Behavioral specs for `jshint-jskit lint`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const TWO_PROBLEMS: &str = "\
stdin: line 2, col 7, Expected '===' and instead saw '=='. (W116)
stdin: line 1, col 1, Unclosed string. (E029)

2 errors";

fn project_with_tools(jshint_output: &str) -> Project {
    let project = Project::new();
    project
        .jskit("JSClass,UIView", "", 0)
        .jshint(jshint_output)
        .file("src/app.js", "var a = 1;\nif (a == 2) {}\n");
    project
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Exit 0 and no output when jshint reports nothing
#[test]
fn clean_file_passes_silently() {
    let project = project_with_tools("");
    lint(&project)
        .path("src/app.js")
        .args(&["--no-color"])
        .passes()
        .stdout_eq("");
}

/// > Exit 1 when any diagnostic is reported
#[test]
fn diagnostics_exit_one_with_text_output() {
    let project = project_with_tools(TWO_PROBLEMS);
    let file = project.path().join("src/app.js");
    let label = file.display();

    lint(&project)
        .path("src/app.js")
        .args(&["--no-color"])
        .exits(1)
        .stdout_eq(&format!(
            "{label}:2:5: warning W116 Expected '===' and instead saw '=='.\n\
             {label}:1:1: error E029 Unclosed string.\n\
             2 problems (1 error, 1 warning)\n"
        ));
}

/// > JSON output carries 0-based positions and the highlighted token
#[test]
fn json_output_lists_diagnostics() {
    let project = project_with_tools(TWO_PROBLEMS);
    let result = lint(&project).path("src/app.js").args(&["-o", "json"]).exits(1);
    let json = result.json();

    assert_eq!(json["passed"], false);
    let diags = json["diagnostics"].as_array().unwrap();
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0]["line"], 1);
    assert_eq!(diags[0]["column"], 4);
    assert_eq!(diags[0]["near"], "==");
    assert_eq!(diags[1]["severity"], "error");
    assert!(diags[1].get("near").is_none());
}

// =============================================================================
// CONFIGURATION SYNTHESIS
// =============================================================================

/// > Globals are appended after the project's own predefs
#[test]
fn config_merges_jshintrc_and_globals() {
    let project = project_with_tools("");
    project.file(".jshintrc", r#"{"undef": true, "predef": ["window"]}"#);

    lint(&project).path("src/app.js").passes();

    let config: serde_json::Value =
        serde_json::from_str(&project.recorded("config.json").unwrap()).unwrap();
    assert_eq!(
        config,
        serde_json::json!({"undef": true, "predef": ["window", "JSClass", "UIView"]})
    );
}

/// > The temporary config does not outlive the run
#[test]
fn temp_config_is_removed() {
    let project = project_with_tools(TWO_PROBLEMS);
    lint(&project).path("src/app.js").exits(1);

    let config_path = project.recorded("config-path").unwrap();
    assert!(!config_path.is_empty());
    assert!(!std::path::Path::new(&config_path).exists());
}

/// > jshint receives --verbose, the filename, the config, then `-`
#[test]
fn jshint_argument_shape() {
    let project = project_with_tools("");
    lint(&project)
        .path("src/app.js")
        .args(&["--jshint-arg", "--extract=auto"])
        .passes();

    let args = project.recorded("jshint-args").unwrap();
    let file = project.path().join("src/app.js");
    assert!(args.starts_with(&format!("--verbose --filename {} --config ", file.display())));
    assert!(args.ends_with(" --extract=auto -"));
}

/// > Relative paths are resolved before the tools run in the file's directory
#[test]
fn relative_path_is_anchored_at_cwd() {
    let project = project_with_tools("stdin: line 1, col 1, Missing semicolon. (W033)");
    project.file("src/.jshintrc", r#"{"asi": false}"#);

    lint(&project)
        .args(&["src/app.js", "--no-color"])
        .exits(1)
        .stdout_has("src/app.js:1:1: warning W033 Missing semicolon.");

    let file = project.path().join("src/app.js");
    let jskit_args = project.recorded("jskit-args").unwrap();
    assert!(jskit_args.ends_with(&format!("--filename {} -", file.display())));
    let jshint_args = project.recorded("jshint-args").unwrap();
    assert!(jshint_args.starts_with(&format!("--verbose --filename {} ", file.display())));

    let config: serde_json::Value =
        serde_json::from_str(&project.recorded("config.json").unwrap()).unwrap();
    assert_eq!(config["asi"], false);
}

/// > Unsaved buffers are linted as `filename.js` in the working directory
#[test]
fn stdin_buffer_uses_stand_in_filename() {
    let project = project_with_tools("");
    lint(&project).stdin("var a;\n").passes();

    let args = project.recorded("jskit-args").unwrap();
    assert!(args.starts_with("globals --frameworks --delimiter , --filename "));
    assert!(args.ends_with("/filename.js -"));
}

/// > --stdin-filename names the buffer read from stdin
#[test]
fn stdin_filename_drives_config_lookup() {
    let project = project_with_tools("stdin: line 1, col 1, Missing semicolon. (W033)");
    project.file("lib/.jshintrc", r#"{"asi": false}"#);

    lint(&project)
        .args(&["-", "--stdin-filename", "lib/b.js", "--no-color"])
        .stdin("var b")
        .exits(1)
        .stdout_has("lib/b.js:1:1: warning W033 Missing semicolon.");

    let config: serde_json::Value =
        serde_json::from_str(&project.recorded("config.json").unwrap()).unwrap();
    assert_eq!(config["asi"], false);
}

// =============================================================================
// FAILURES
// =============================================================================

/// > A failing globals helper aborts the pass before jshint runs
#[test]
fn globals_failure_reports_helper_stderr() {
    let project = Project::new();
    project
        .jskit("", "cannot find module", 1)
        .jshint("")
        .file("a.js", "var a;");

    lint(&project)
        .path("a.js")
        .exits(2)
        .stderr_has("cannot find module");
    assert!(project.recorded("jshint-args").is_none());
}

/// > A malformed .jshintrc is a configuration error
#[test]
fn malformed_jshintrc_is_config_error() {
    let project = project_with_tools("");
    project.file(".jshintrc", "{ \"undef\": tru");

    lint(&project)
        .path("src/app.js")
        .exits(2)
        .stderr_has("config error");
    assert!(project.recorded("jshint-args").is_none());
}

/// > A missing jshint executable is reported as not installed
#[test]
fn missing_jshint_is_reported() {
    let project = Project::new();
    project.jskit("", "", 0).file("a.js", "var a;");

    lint(&project)
        .path("a.js")
        .exits(2)
        .stderr_has("tool not installed");
}

/// > The temporary config is removed even when jshint cannot start
#[test]
fn temp_config_is_removed_when_jshint_cannot_start() {
    let project = Project::new();
    project.jskit("A", "", 0).file("a.js", "var a;");
    let tmp = tempfile::tempdir().unwrap();

    lint(&project)
        .path("a.js")
        .env("TMPDIR", tmp.path().to_str().unwrap())
        .exits(2)
        .stderr_has("tool not installed");

    let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert!(leftovers.is_empty(), "left behind: {leftovers:?}");
}

/// > --disable reports nothing and runs no tool
#[test]
fn disabled_adapter_runs_nothing() {
    let project = project_with_tools(TWO_PROBLEMS);
    lint(&project)
        .path("src/app.js")
        .env("JSHINT_JSKIT_DISABLE", "true")
        .passes()
        .stdout_eq("");
    assert!(project.recorded("jskit-args").is_none());
}

/// > NO_COLOR disables color escapes
#[test]
fn no_color_env_disables_color() {
    let project = project_with_tools(TWO_PROBLEMS);
    let result = lint(&project)
        .path("src/app.js")
        .env("NO_COLOR", "1")
        .exits(1);
    assert!(!result.stdout().contains('\x1b'));
}
