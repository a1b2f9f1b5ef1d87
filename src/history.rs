//! Prompt history log.
//! Each run saved with `--save` appends one block to a plain-text file.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// History file name in the home directory.
pub const HISTORY_FILE: &str = ".prompt-forge.log";

/// Returns `~/.prompt-forge.log`.
pub fn default_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirectoryError)?;
    Ok(home.join(HISTORY_FILE))
}

/// Expands a leading `~` to the home directory.
pub fn expand_home<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(Error::HomeDirectoryError)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Formats one history block.
pub fn format_entry(prompt: &str, response: Option<&str>, now: DateTime<Local>) -> String {
    let mut entry = format!("\n=== {} ===\n", now.format("%Y-%m-%d %H:%M:%S"));
    entry.push_str(&format!("Prompt:\n{prompt}\n\n"));
    if let Some(response) = response.filter(|response| !response.is_empty()) {
        entry.push_str(&format!("Response:\n{response}\n\n"));
    }
    entry.push_str("---\n");
    entry
}

/// Appends a block to the history file, creating parent directories as needed.
///
/// # Returns
/// * `Result<PathBuf>` - The path actually written, after `~` expansion
pub fn append_history<P: AsRef<Path>>(
    path: P,
    prompt: &str,
    response: Option<&str>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let path = expand_home(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
    }

    debug!("Appending history to {}", path.display());
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(format_entry(prompt, response, now).as_bytes())?;
    Ok(path)
}
