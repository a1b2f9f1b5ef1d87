//! Template loading for prompt-forge.
//! A template comes from exactly one place: a file, inline text given on the
//! command line, or redirected standard input.
use crate::error::{Error, Result};
use log::debug;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Represents the source location of a template.
#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Template file path
    FileSystem(PathBuf),
    /// Template text passed with `--template`
    Inline(String),
    /// Template piped through standard input
    Stdin,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Inline(_) => write!(f, "inline text"),
            TemplateSource::Stdin => write!(f, "standard input"),
        }
    }
}

impl TemplateSource {
    /// Picks the template source from the command line arguments.
    ///
    /// # Errors
    /// * `Error::ConflictingTemplateSourceError` if both a file and inline text are given
    pub fn from_args(file: Option<PathBuf>, inline: Option<String>) -> Result<Self> {
        match (file, inline) {
            (Some(_), Some(_)) => Err(Error::ConflictingTemplateSourceError),
            (None, Some(text)) => Ok(Self::Inline(text)),
            (Some(path), None) => Ok(Self::FileSystem(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }
}

/// Trait for loading template text from different sources.
pub trait TemplateLoader {
    /// Loads the full template text.
    fn load(&self) -> Result<String>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self) -> Result<String> {
        read_file(self.path.as_ref())
    }
}

/// Loader for template text given directly on the command line.
pub struct InlineLoader<S: AsRef<str>> {
    text: S,
}

impl<S: AsRef<str>> InlineLoader<S> {
    pub fn new(text: S) -> Self {
        Self { text }
    }
}

impl<S: AsRef<str>> TemplateLoader for InlineLoader<S> {
    fn load(&self) -> Result<String> {
        Ok(self.text.as_ref().to_string())
    }
}

/// Loader for templates redirected through standard input.
pub struct StdinLoader;

impl TemplateLoader for StdinLoader {
    /// # Errors
    /// * `Error::NoTemplateError` if stdin is an interactive terminal
    fn load(&self) -> Result<String> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::NoTemplateError);
        }
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Reads a whole file, reporting a missing file as `Error::FileNotFoundError`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            Error::FileNotFoundError { path: path.display().to_string() }
        }
        _ => Error::IoError(e),
    })
}

/// Returns the template text from the provided template source.
pub fn load_template(source: TemplateSource) -> Result<String> {
    debug!("Loading template from the {}", source);

    let loader: Box<dyn TemplateLoader> = match source {
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
        TemplateSource::Inline(text) => Box::new(InlineLoader::new(text)),
        TemplateSource::Stdin => Box::new(StdinLoader),
    };

    loader.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_display() {
        let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/prompt.txt"));
        assert_eq!(format!("{}", fs_source), "local path: '/path/to/prompt.txt'");

        let inline = TemplateSource::Inline("Hello {{name}}".to_string());
        assert_eq!(format!("{}", inline), "inline text");
        assert_eq!(format!("{}", TemplateSource::Stdin), "standard input");
    }
}
