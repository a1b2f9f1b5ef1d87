//! Response simulation.
//!
//! A rule set is an ordered list of (pattern, response) pairs. The response of
//! the first rule whose pattern is found in the prompt, ignoring case, is the
//! simulated answer.

use crate::config::load_structured;
use crate::error::{Error, Result};
use crate::renderer::ValueMap;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

/// Returned when no rule matches, which only happens without a catch-all rule.
pub const NO_MATCH_RESPONSE: &str = "No matching response.";

const DEFAULT_RULES: [(&str, &str); 6] = [
    (
        r"code|programming|python|javascript|function|class|implement",
        "Here's a code implementation:\n\n```\n# Implementation\n```\n\nThis demonstrates the functionality.",
    ),
    (
        r"explain|what is|describe|definition",
        "Explanation:\n\nKey points:\n1. First\n2. Second\n3. Third",
    ),
    (r"list|enumerate|steps|how to", "Steps:\n\n1. First\n2. Second\n3. Third"),
    (
        r"debug|error|fix|problem",
        "Troubleshooting:\n\n**Problem:** [issue]\n**Solution:** [fix]\n**Explanation:** [why]",
    ),
    (
        r"review|analyze|evaluate",
        "Analysis:\n\n**Strengths:** Point 1\n**Improvements:** Point 2",
    ),
    (r".*", "I understand. Here's a response addressing your needs."),
];

static DEFAULT_RULE_SET: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new(
        DEFAULT_RULES
            .iter()
            .map(|(pattern, response)| Rule::new(pattern, response))
            .collect::<Result<Vec<_>>>()
            .expect("built-in rule patterns are valid"),
    )
});

/// A compiled (pattern, response) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    response: String,
}

impl Rule {
    /// Compiles `pattern` as a case-insensitive regular expression.
    ///
    /// # Errors
    /// * `Error::InvalidRulePatternError` if the pattern does not compile
    pub fn new(pattern: &str, response: &str) -> Result<Self> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidRulePatternError {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { pattern: compiled, response: response.to_string() })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered list of rules, scanned front to back.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(alias = "regex")]
    pattern: String,
    response: String,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: Vec<RawRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set, ending with a catch-all rule.
    pub fn builtin() -> &'static RuleSet {
        &DEFAULT_RULE_SET
    }

    /// Loads rules from the `rules` list of a JSON or YAML file.
    /// A file without a `rules` entry yields an empty rule set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file: RulesFile = load_structured(path)?;
        let rules = file
            .rules
            .iter()
            .map(|raw| Rule::new(&raw.pattern, &raw.response))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule matching `text`.
    pub fn find(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.is_match(text))
    }

    /// Simulates a response to `text`.
    ///
    /// `{{name}}` in the matched response is replaced with the value of `name`.
    /// Default clauses are not recognised in responses.
    pub fn respond(&self, text: &str, values: &ValueMap) -> String {
        let Some(rule) = self.find(text) else {
            debug!("No rule matched");
            return NO_MATCH_RESPONSE.to_string();
        };
        debug!("Matched rule '{}'", rule.pattern());
        values.iter().fold(rule.response.clone(), |response, (name, value)| {
            response.replace(&format!("{{{{{name}}}}}"), value)
        })
    }
}
