//! Error handling for prompt-forge.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Exit status used when the user interrupts the run (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Custom error types for prompt-forge operations.
///
/// This enum represents all possible errors that can occur while loading,
/// resolving, rendering and simulating a prompt template.
#[derive(Error, Debug)]
pub enum Error {
    /// No template file, inline text or redirected stdin was provided.
    #[error("No template (use file, --template, or stdin)")]
    NoTemplateError,

    /// Both a template file and inline template text were provided.
    #[error("Cannot specify both a template file and --template")]
    ConflictingTemplateSourceError,

    /// A `--var` argument is not of the form `KEY=VALUE`.
    #[error("Invalid --var: {argument} (use KEY=VALUE)")]
    InvalidVariableSyntaxError { argument: String },

    /// Required variables are still unresolved after every resolution stage.
    #[error("Missing: {}", .names.join(", "))]
    MissingVariableError { names: Vec<String> },

    /// A template, values or rules file does not exist.
    #[error("File not found: '{path}'")]
    FileNotFoundError { path: String },

    /// A values or rules file could not be parsed.
    #[error("Failed to parse '{path}': {reason}")]
    ParseError { path: String, reason: String },

    /// A rule pattern is not a valid regular expression.
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidRulePatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The home directory could not be determined for the default history file.
    #[error("Could not determine home directory")]
    HomeDirectoryError,

    /// Interactive input failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The user interrupted the run.
    #[error("Interrupted")]
    Interrupted,

    /// Represents errors that occur during file system operations.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Interruption exits with [`INTERRUPTED_EXIT_CODE`] and no message;
/// every other error is printed as `Error: <message>` and exits with status 1.
pub fn default_error_handler(err: Error) -> ! {
    if let Error::Interrupted = err {
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }
    eprintln!("Error: {err}");
    std::process::exit(1);
}
