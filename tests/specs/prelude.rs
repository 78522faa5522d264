//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the jshint-jskit binary against
//! temporary projects with scripted stand-ins for jshint and JSKit.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the jshint-jskit binary
pub fn jshint_jskit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jshint-jskit"));
    for var in [
        "JSHINT_JSKIT_JSHINT",
        "JSHINT_JSKIT_JSKIT",
        "JSHINT_JSKIT_DELIMITER",
        "JSHINT_JSKIT_WORKING_DIR",
        "JSHINT_JSKIT_DISABLE",
        "JSHINT_JSKIT_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A temporary project with scripted tools under `.tools/`.
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(project.tools_dir()).unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn tools_dir(&self) -> PathBuf {
        self.dir.path().join(".tools")
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
        self
    }

    /// Script standing in for `jskit`: prints `stdout`, `stderr`, exits `code`.
    pub fn jskit(&self, stdout: &str, stderr: &str, code: i32) -> &Self {
        let script = format!(
            "#!/bin/sh\nprintf '%s' \"$*\" > '{tools}/jskit-args'\ncat > /dev/null\nprintf '%s' '{stdout}'\nprintf '%s' '{stderr}' >&2\nexit {code}\n",
            tools = self.tools_dir().display(),
        );
        self.script("jskit", &script)
    }

    /// Script standing in for `jshint`: keeps a copy of its config under
    /// `.tools/config.json` and prints `output`.
    pub fn jshint(&self, output: &str) -> &Self {
        let script = format!(
            r#"#!/bin/sh
printf '%s' "$*" > '{tools}/jshint-args'
cfg=""
while [ $# -gt 0 ]; do
  if [ "$1" = "--config" ]; then cfg="$2"; fi
  shift
done
printf '%s' "$cfg" > '{tools}/config-path'
cat "$cfg" > '{tools}/config.json'
cat > /dev/null
cat <<'JSHINT_OUTPUT'
{output}
JSHINT_OUTPUT
exit 2
"#,
            tools = self.tools_dir().display(),
        );
        self.script("jshint", &script)
    }

    fn script(&self, name: &str, content: &str) -> &Self {
        use std::os::unix::fs::PermissionsExt;
        let path = self.tools_dir().join(name);
        fs::write(&path, content).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    pub fn tool_path(&self, name: &str) -> String {
        self.tools_dir().join(name).to_string_lossy().into_owned()
    }

    /// Contents of a file recorded by the scripted tools.
    pub fn recorded(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.tools_dir().join(name)).ok()
    }
}

/// Start a `lint` invocation in `project`.
pub fn lint(project: &Project) -> CliBuilder<'_> {
    CliBuilder::new(project, "lint").tools()
}

/// Start a `globals` invocation in `project`.
pub fn globals(project: &Project) -> CliBuilder<'_> {
    CliBuilder::new(project, "globals").tools()
}

/// Start a `config` invocation in `project`.
pub fn config(project: &Project) -> CliBuilder<'_> {
    CliBuilder::new(project, "config").tools()
}

/// Start a `complete` invocation in `project`.
pub fn complete(project: &Project) -> CliBuilder<'_> {
    CliBuilder::new(project, "complete")
}

/// Fluent builder for one binary invocation.
pub struct CliBuilder<'a> {
    project: &'a Project,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

#[allow(dead_code)]
impl<'a> CliBuilder<'a> {
    fn new(project: &'a Project, subcommand: &str) -> Self {
        Self {
            project,
            args: vec![subcommand.to_string()],
            envs: Vec::new(),
            stdin: None,
        }
    }

    fn tools(self) -> Self {
        let jshint = self.project.tool_path("jshint");
        let jskit = self.project.tool_path("jskit");
        self.args(&["--jshint", &jshint, "--jskit", &jskit])
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Pass a project-relative file as the PATH argument.
    pub fn path(self, rel: &str) -> Self {
        let full = self.project.path().join(rel);
        let full = full.to_string_lossy().into_owned();
        self.args(&[full.as_str()])
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    fn run(self) -> std::process::Output {
        let mut cmd = jshint_jskit_cmd();
        cmd.args(&self.args);
        cmd.current_dir(self.project.path());
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("command should run");
        let mut stdin = child.stdin.take().unwrap();
        let text = self.stdin.unwrap_or_default();
        let writer = std::thread::spawn(move || {
            stdin.write_all(text.as_bytes()).ok();
        });
        let output = child.wait_with_output().expect("command should finish");
        writer.join().unwrap();
        output
    }

    pub fn passes(self) -> RunAssert {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected success, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.run();
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}
