//! Structured input files for prompt-forge.
//! Values files and rules files are read once and may be written as JSON or YAML.

use crate::error::{Error, Result};
use crate::loader::read_file;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parses structured content, trying JSON first and falling back to YAML.
/// Content from a `.json` origin is parsed as JSON only.
///
/// # Arguments
/// * `content` - Raw file content
/// * `origin` - Name of the content's origin, used in error messages
///
/// # Errors
/// * `Error::ParseError` if the content is neither valid JSON nor valid YAML
///   for the requested type
pub fn parse_structured<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(json_err) if origin.ends_with(".json") => Err(Error::ParseError {
            path: origin.to_string(),
            reason: json_err.to_string(),
        }),
        Err(json_err) => {
            debug!("'{origin}' is not JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content).map_err(|e| Error::ParseError {
                path: origin.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Reads a structured file from disk and parses it.
///
/// # Errors
/// * `Error::FileNotFoundError` if the file does not exist
/// * `Error::ParseError` if the file cannot be parsed
pub fn load_structured<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    debug!("Loading structured file {}", path.display());
    let content = read_file(path)?;
    parse_structured(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_parse_json_then_yaml() {
        let json: IndexMap<String, String> =
            parse_structured(r#"{"b": "1", "a": "2"}"#, "values.json").unwrap();
        assert_eq!(json.keys().collect::<Vec<_>>(), ["b", "a"]);

        let yaml: IndexMap<String, String> =
            parse_structured("name: Ada\nrole: engineer\n", "values.yaml").unwrap();
        assert_eq!(yaml["name"], "Ada");
        assert_eq!(yaml["role"], "engineer");
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_structured::<IndexMap<String, String>>("[1, 2", "broken.json")
            .unwrap_err();
        match err {
            Error::ParseError { path, .. } => assert_eq!(path, "broken.json"),
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_json_file_is_not_reparsed_as_yaml() {
        let err = parse_structured::<IndexMap<String, String>>(r#"{"name": "Ada",}"#, "v.json")
            .unwrap_err();
        match err {
            Error::ParseError { reason, .. } => assert!(reason.contains("trailing comma")),
            other => panic!("Expected ParseError, got {other:?}"),
        }

        let yaml: IndexMap<String, String> =
            parse_structured(r#"{"name": "Ada",}"#, "v.yaml").unwrap();
        assert_eq!(yaml["name"], "Ada");
    }
}
