//! Configuration file support for tplscore.
//!
//! Loads settings from `~/.tplscore/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.tplscore/config.toml
//!
//! [output]
//! # "text" or "json"
//! format = "json"
//!
//! [recommend]
//! # Maximum recommendations returned
//! limit = 10
//!
//! [tags]
//! # Maximum tag suggestions per template
//! limit = 8
//!
//! [search]
//! # Minimum trigram similarity for a search hit
//! threshold = 0.3
//! ```

use crate::cli::OutputFormat;
use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format name ("text" or "json").
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendConfig {
    /// Maximum recommendations returned.
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsConfig {
    /// Maximum tag suggestions per template.
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchConfig {
    /// Minimum similarity for a search hit.
    pub threshold: Option<f64>,
}

/// Returns the path to the config file (~/.tplscore/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tplscore").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to read or parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;

    tracing::debug!(
        target: "tplscore::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file. Must run before CLI parsing.
pub fn apply_config_to_env() {
    match load_config() {
        Ok(Some(config)) => apply_to_env(&config),
        Ok(None) => {}
        Err(e) => tracing::warn!(
            target: "tplscore::config",
            error = %e,
            "Ignoring unreadable configuration file"
        ),
    }
}

fn apply_to_env(config: &Config) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "tplscore::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    fn skip_invalid(key: &str, value: &str) {
        tracing::warn!(
            target: "tplscore::config",
            key,
            value,
            "Ignoring invalid configuration value"
        );
    }

    if let Some(ref format) = config.output.format {
        if OutputFormat::from_str(format, false).is_ok() {
            set_if_absent("TPLSCORE_FORMAT", format);
        } else {
            skip_invalid("output.format", format);
        }
    }

    if let Some(limit) = config.recommend.limit {
        set_if_absent("TPLSCORE_RECOMMEND_LIMIT", &limit.to_string());
    }

    if let Some(limit) = config.tags.limit {
        set_if_absent("TPLSCORE_TAG_LIMIT", &limit.to_string());
    }

    if let Some(threshold) = config.search.threshold {
        if (0.0..=1.0).contains(&threshold) {
            set_if_absent("TPLSCORE_SEARCH_THRESHOLD", &threshold.to_string());
        } else {
            skip_invalid("search.threshold", &threshold.to_string());
        }
    }
}
