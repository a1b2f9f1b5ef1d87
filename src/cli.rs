//! Command-line interface implementation for prompt-forge.
//! Provides argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format of the rendered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Command-line arguments structure for prompt-forge.
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    about = "Craft and test AI prompts locally",
    long_about = None
)]
pub struct Args {
    /// Template file (reads stdin when omitted)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Inline template text
    #[arg(long = "template", value_name = "TEXT")]
    pub inline_template: Option<String>,

    /// Template variable, may be repeated
    #[arg(long = "var", value_name = "K=V")]
    pub vars: Vec<String>,

    /// JSON or YAML file with template variables
    #[arg(long = "vars", value_name = "FILE")]
    pub vars_file: Option<PathBuf>,

    /// Prompt for variables that are still missing
    #[arg(long)]
    pub interactive: bool,

    /// Simulate an AI response
    #[arg(long)]
    pub simulate: bool,

    /// Custom response rules file
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show an estimated token count
    #[arg(long)]
    pub show_tokens: bool,

    /// Append the prompt to a history file (defaults to ~/.prompt-forge.log)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// List template variables and exit
    #[arg(long, conflicts_with_all = ["simulate", "save"])]
    pub check: bool,

    /// Preview the rendered prompt and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// Exits through clap's default error handling on invalid arguments.
pub fn get_args() -> Args {
    Args::parse()
}
