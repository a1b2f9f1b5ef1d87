//! Interactive input for prompt-forge.
//! Asks the user for template variables that could not be resolved otherwise.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for the value of `name`, showing `default` when there is one.
    ///
    /// The answer is returned as typed; an empty answer is resolved by the caller.
    fn ask(&self, name: &str, default: Option<&str>) -> Result<String>;
}

/// Prompter reading answers from the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, name: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(format!("Enter '{name}'"))
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(map_dialoguer_error)
    }
}

fn map_dialoguer_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            Error::Interrupted
        }
        other => Error::PromptError(other.to_string()),
    }
}
