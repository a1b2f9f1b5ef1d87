use prompt_forge::error::Error;
use prompt_forge::renderer::ValueMap;
use prompt_forge::rules::{Rule, RuleSet, NO_MATCH_RESPONSE};
use std::fs;
use tempfile::TempDir;

const GENERIC: &str = "I understand. Here's a response addressing your needs.";

#[test]
fn test_builtin_rule_order() {
    let rules = RuleSet::builtin();
    assert_eq!(rules.len(), 6);
    assert_eq!(rules.rules()[5].pattern(), ".*");
}

#[test]
fn test_first_matching_rule_wins() {
    let response =
        RuleSet::builtin().respond("please explain how to implement a class", &ValueMap::new());
    assert!(response.starts_with("Here's a code implementation:"));
}

#[test]
fn test_matching_ignores_case() {
    let response = RuleSet::builtin().respond("EXPLAIN recursion", &ValueMap::new());
    assert!(response.starts_with("Explanation:"));

    let response = RuleSet::builtin().respond("Please Review my essay", &ValueMap::new());
    assert!(response.starts_with("Analysis:"));
}

#[test]
fn test_catch_all_response() {
    assert_eq!(RuleSet::builtin().respond("hello there", &ValueMap::new()), GENERIC);
    assert_eq!(RuleSet::builtin().respond("", &ValueMap::new()), GENERIC);
}

#[test]
fn test_no_match_fallback() {
    let rules = RuleSet::new(vec![Rule::new("^never$", "nope").unwrap()]);
    assert_eq!(rules.respond("something", &ValueMap::new()), NO_MATCH_RESPONSE);
    assert_eq!(RuleSet::default().respond("something", &ValueMap::new()), NO_MATCH_RESPONSE);
}

#[test]
fn test_response_markers_are_substituted() {
    let rules = RuleSet::new(vec![Rule::new("greet", "Hi {{name}}, {{name}}! {{other}}").unwrap()]);
    let mut values = ValueMap::new();
    values.insert("name".to_string(), "Ada".to_string());

    assert_eq!(rules.respond("greet me", &values), "Hi Ada, Ada! {{other}}");
}

#[test]
fn test_response_default_clause_is_not_recognised() {
    let rules = RuleSet::new(vec![Rule::new(".*", r#"{{name|default="x"}}"#).unwrap()]);
    let mut values = ValueMap::new();
    values.insert("name".to_string(), "Ada".to_string());

    assert_eq!(rules.respond("anything", &values), r#"{{name|default="x"}}"#);
}

#[test]
fn test_invalid_pattern() {
    match Rule::new("(unclosed", "x") {
        Err(Error::InvalidRulePatternError { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        other => panic!("Expected InvalidRulePatternError, got {other:?}"),
    }
}

#[test]
fn test_rules_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{"rules": [
            {"pattern": "weather", "response": "Sunny in {{city}}."},
            {"regex": ".*", "response": "Fallback."}
        ]}"#,
    )
    .unwrap();

    let rules = RuleSet::from_file(&path).unwrap();
    assert_eq!(rules.len(), 2);

    let mut values = ValueMap::new();
    values.insert("city".to_string(), "Oslo".to_string());
    assert_eq!(rules.respond("What's the WEATHER?", &values), "Sunny in Oslo.");
    assert_eq!(rules.respond("hi", &values), "Fallback.");
}

#[test]
fn test_rules_from_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.yaml");
    fs::write(&path, "rules:\n  - pattern: hello\n    response: Hello back.\n").unwrap();

    let rules = RuleSet::from_file(&path).unwrap();
    assert_eq!(rules.respond("hello", &ValueMap::new()), "Hello back.");
}

#[test]
fn test_rules_file_without_rules_key_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, r#"{"other": []}"#).unwrap();

    let rules = RuleSet::from_file(&path).unwrap();
    assert!(rules.is_empty());
    assert_eq!(rules.respond("anything", &ValueMap::new()), NO_MATCH_RESPONSE);
}

#[test]
fn test_rules_file_with_bad_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, r#"{"rules": [{"pattern": "[", "response": "x"}]}"#).unwrap();

    assert!(matches!(
        RuleSet::from_file(&path),
        Err(Error::InvalidRulePatternError { .. })
    ));
}
