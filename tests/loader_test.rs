use prompt_forge::error::Error;
use prompt_forge::loader::{load_template, TemplateSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_template_source_from_args() {
    assert_eq!(
        TemplateSource::from_args(Some(PathBuf::from("p.txt")), None).unwrap(),
        TemplateSource::FileSystem(PathBuf::from("p.txt"))
    );
    assert_eq!(
        TemplateSource::from_args(None, Some("Hi".to_string())).unwrap(),
        TemplateSource::Inline("Hi".to_string())
    );
    assert_eq!(TemplateSource::from_args(None, None).unwrap(), TemplateSource::Stdin);
}

#[test]
fn test_conflicting_sources() {
    let result = TemplateSource::from_args(Some(PathBuf::from("p.txt")), Some("Hi".to_string()));
    assert!(matches!(result, Err(Error::ConflictingTemplateSourceError)));
}

#[test]
fn test_load_inline_template() {
    let template = load_template(TemplateSource::Inline("Hello {{name}}".to_string())).unwrap();
    assert_eq!(template, "Hello {{name}}");
}

#[test_log::test]
fn test_load_file_template() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompt.txt");
    fs::write(&path, "Review {{file}}\n").unwrap();

    let template = load_template(TemplateSource::FileSystem(path)).unwrap();
    assert_eq!(template, "Review {{file}}\n");
}

#[test]
fn test_load_missing_file_template() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_template(TemplateSource::FileSystem(temp_dir.path().join("missing.txt")));
    assert!(matches!(result, Err(Error::FileNotFoundError { .. })));
}
