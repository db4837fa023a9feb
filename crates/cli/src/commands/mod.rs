//! CLI command handlers.

mod quality;
mod recommend;
mod search;
mod tags;

pub(crate) use quality::handle_quality_command;
pub(crate) use recommend::handle_recommend_command;
pub(crate) use search::handle_search_command;
pub(crate) use tags::handle_tags_command;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tplscore_scoring::Template;

/// Load templates, attaching the file path to any error.
fn read_templates(path: &Path) -> Result<Vec<Template>> {
    tplscore_scoring::load_templates(path)
        .with_context(|| format!("Failed to load templates from {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display label for a template: its title, or its id when untitled.
fn display_name(template: &Template) -> &str {
    if template.title.is_empty() {
        &template.id
    } else {
        &template.title
    }
}
