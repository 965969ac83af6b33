//! Loading users from disk.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - `.json`: an array of `{"name": ..., "birthday": "YYYY-MM-DD"}` objects
//! - `.toml`: a list of `[[users]]` tables with the same keys
//!
//! Parsing is all-or-nothing: one malformed record fails the whole file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::User;

/// Errors while loading a users file.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read users file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse users file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported users file format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Supported on-disk roster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Toml,
}

impl RosterFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(RosterFormat::Json),
            "toml" => Some(RosterFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct TomlRoster {
    #[serde(default)]
    users: Vec<User>,
}

/// Parse users from an in-memory string.
///
/// The error is the underlying parser message, e.g. ``missing field `name` ``.
pub fn parse_users(content: &str, format: RosterFormat) -> Result<Vec<User>, String> {
    match format {
        RosterFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        RosterFormat::Toml => toml::from_str::<TomlRoster>(content)
            .map(|roster| roster.users)
            .map_err(|e| e.to_string()),
    }
}

/// Load every user from `path`.
pub fn load_users(path: &Path) -> Result<Vec<User>, RosterError> {
    let format = RosterFormat::from_path(path).ok_or_else(|| RosterError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| RosterError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let users = parse_users(&content, format).map_err(|message| RosterError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    info!(path = %path.display(), count = users.len(), "loaded users");
    Ok(users)
}
