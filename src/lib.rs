//! prompt-forge crafts and tests AI prompts locally.
//! It renders templates with `{{name}}` markers from command-line values, values
//! files and interactive answers, and can simulate a response with regex rules.

/// Command-line interface module for the prompt-forge application
pub mod cli;

/// Structured input files
/// Supports JSON and YAML formats
pub mod config;

/// Error types and handling for the prompt-forge application
pub mod error;

/// Prompt history log
pub mod history;

/// Template loading from a file, inline text or stdin
pub mod loader;

/// Logger setup
pub mod logger;

/// Output formatting and token estimation
pub mod output;

/// Resolution of variable values from every source
pub mod parser;

/// User input and interaction handling
pub mod prompt;

/// Marker substitution
pub mod renderer;

/// Rule-based response simulation
pub mod rules;

/// Template variable extraction
pub mod template;
