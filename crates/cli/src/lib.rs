//! jshint adapter for JSKit projects.
//!
//! Lints JavaScript buffers with jshint after teaching it the globals the
//! JSKit helper resolves, and offers TestKit assertion completions.

pub mod cli;
pub mod color;
pub mod completion;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod globals;
pub mod input;
pub mod lint;
pub mod output;
pub mod process;
pub mod settings;
pub mod temp;

pub use cli::{Cli, Command, LintArgs, OutputFormat};
pub use color::ColorMode;
pub use completion::{ASSERTIONS, Completion, CompletionContext, query_completions};
pub use config::{LintConfig, synthesize_config};
pub use diagnostic::{Diagnostic, Severity, parse_line, parse_output};
pub use error::{Error, ExitCode, Result};
pub use globals::resolve_globals;
pub use lint::{Linter, lint};
pub use settings::Settings;
pub use temp::TempConfigFile;
