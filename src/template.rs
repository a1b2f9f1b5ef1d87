//! Template variable extraction.
//!
//! A marker is `{{name}}` or `{{name|default="literal"}}`, where `name` is a run
//! of word characters and the literal is any run of non-quote characters.
//! Anything else, including unbalanced braces, is plain text.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a marker, capturing the name and the optional default literal.
pub static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{\{(\w+)(?:\|default="([^"]*)")?\}\}"#).expect("marker pattern is valid")
});

/// Template variables in order of first appearance, with their defaults.
/// `None` means the variable is required.
pub type Variables = IndexMap<String, Option<String>>;

/// Scans the template and returns every distinct variable it references.
///
/// The first default seen for a name governs. A later marker without a default
/// does not erase it, and a later default only fills in for a name that had none.
pub fn extract_variables(template: &str) -> Variables {
    let mut variables = Variables::new();
    for caps in MARKER.captures_iter(template) {
        let name = caps[1].to_string();
        let default = caps.get(2).map(|m| m.as_str().to_string());
        let entry = variables.entry(name).or_insert(None);
        if entry.is_none() {
            *entry = default;
        }
    }
    variables
}

/// Formats the variable listing printed by `--check`.
pub fn describe_variables(variables: &Variables) -> String {
    let mut out = String::from("Template variables:");
    for (name, default) in variables {
        let status = match default {
            Some(default) => format!("(default: \"{default}\")"),
            None => "(required)".to_string(),
        };
        out.push_str(&format!("\n  - {name} {status}"));
    }
    out
}
