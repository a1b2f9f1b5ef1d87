//! Variable value resolution.
//!
//! Values are merged from, highest priority first: `--var` arguments, the
//! values file, marker defaults, and finally interactive answers.
use crate::config::load_structured;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::ValueMap;
use crate::template::Variables;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Outcome of value resolution.
#[derive(Debug, Default, PartialEq)]
pub struct Resolution {
    /// Values for every template variable, plus any unused supplied values.
    pub values: ValueMap,
    /// Supplied names that no template variable uses.
    pub unused: Vec<String>,
}

/// Parses `KEY=VALUE` arguments. The value may itself contain `=`.
///
/// # Errors
/// * `Error::InvalidVariableSyntaxError` for an argument without `=`
pub fn parse_var_args<S: AsRef<str>>(args: &[S]) -> Result<ValueMap> {
    let mut values = ValueMap::new();
    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            Error::InvalidVariableSyntaxError { argument: arg.to_string() }
        })?;
        values.insert(key.to_string(), value.to_string());
    }
    Ok(values)
}

/// Converts a values-file entry to the text substituted into the template.
pub fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loads a flat mapping of variable values from a JSON or YAML file.
pub fn load_values_file<P: AsRef<Path>>(path: P) -> Result<ValueMap> {
    let raw: IndexMap<String, serde_json::Value> = load_structured(path)?;
    Ok(raw.iter().map(|(k, v)| (k.clone(), value_to_string(v))).collect())
}

/// Resolves a value for every template variable.
///
/// # Arguments
/// * `variables` - Variables extracted from the template
/// * `file_values` - Values loaded from the values file
/// * `cli_values` - Values given with `--var`
/// * `prompter` - Interactive input, only consulted when present
///
/// # Errors
/// * `Error::MissingVariableError` listing every variable left without a value
pub fn resolve_values(
    variables: &Variables,
    file_values: ValueMap,
    cli_values: ValueMap,
    prompter: Option<&dyn Prompter>,
) -> Result<Resolution> {
    let mut values = file_values;
    for (key, value) in cli_values {
        values.insert(key, value);
    }

    let unused: Vec<String> =
        values.keys().filter(|k| !variables.contains_key(*k)).cloned().collect();

    for (name, default) in variables {
        if values.contains_key(name) {
            debug!("Variable '{name}' supplied explicitly");
            continue;
        }
        if let Some(default) = default {
            debug!("Variable '{name}' uses its default");
            values.insert(name.clone(), default.clone());
        }
    }

    if let Some(prompter) = prompter {
        for (name, default) in variables {
            if values.contains_key(name) {
                continue;
            }
            let answer = prompter.ask(name, default.as_deref())?;
            let answer = answer.trim();
            let value = if answer.is_empty() {
                default.clone().unwrap_or_default()
            } else {
                answer.to_string()
            };
            debug!("Variable '{name}' answered interactively");
            values.insert(name.clone(), value);
        }
    }

    let missing: Vec<String> =
        variables.keys().filter(|name| !values.contains_key(*name)).cloned().collect();
    if !missing.is_empty() {
        return Err(Error::MissingVariableError { names: missing });
    }

    Ok(Resolution { values, unused })
}
