//! Template rendering for prompt-forge.
//! Substitutes resolved values into the markers of a template.
use crate::template::MARKER;
use indexmap::IndexMap;
use regex::Captures;

/// Resolved variable values, keyed by variable name.
pub type ValueMap = IndexMap<String, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given values.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `values` - Resolved variable values
    fn render(&self, template: &str, values: &ValueMap) -> String;
}

/// Renderer for `{{name}}` / `{{name|default="..."}}` markers.
///
/// Every marker whose name has a value is replaced by that value, whatever its
/// default clause says. Markers without a value are left as they are. Values
/// are inserted literally and never scanned for markers themselves.
#[derive(Debug, Default)]
pub struct MarkerRenderer;

impl MarkerRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MarkerRenderer {
    fn render(&self, template: &str, values: &ValueMap) -> String {
        MARKER
            .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
