//! Loading templates and user history from JSON files.
//!
//! A templates file may hold a single template object or an array of them.

use crate::{Template, UserHistory};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading scorer input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid input JSON.
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Template>),
    One(Box<Template>),
}

/// Parse templates from a JSON string (object or array).
pub fn parse_templates(json: &str) -> Result<Vec<Template>, serde_json::Error> {
    Ok(match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(templates) => templates,
        OneOrMany::One(template) => vec![*template],
    })
}

/// Load templates from a JSON file.
pub fn load_templates(path: &Path) -> Result<Vec<Template>, InputError> {
    let content = read(path)?;
    let templates = parse_templates(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        target: "tplscore::input",
        path = %path.display(),
        count = templates.len(),
        "Loaded templates"
    );

    Ok(templates)
}

/// Load a user history record from a JSON file.
pub fn load_history(path: &Path) -> Result<UserHistory, InputError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
