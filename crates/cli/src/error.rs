use std::path::PathBuf;

/// Adapter error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `.jshintrc` exists but is not a valid JSON object
    #[error("config error: {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// External helper exited with a non-zero status.
    ///
    /// Displays the helper's captured stderr verbatim.
    #[error("{stderr}")]
    ToolInvocation { tool: String, stderr: String },

    /// Executable could not be located or started
    #[error("{program}: tool not installed or not startable: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),
}

/// Result type using the adapter Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes of the `jshint-jskit` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No diagnostics reported
    Success = 0,
    /// One or more diagnostics reported
    LintFailed = 1,
    /// Configuration, environment or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ConfigParse { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::ToolInvocation { .. } | Error::ProcessSpawn { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
