//! CLI handler for the `tags` command.

use super::{display_name, print_json, read_templates};
use crate::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tplscore_scoring::{generate_tags_with_limit, SuggestedTag, Template};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TagSuggestions {
    template_id: String,
    title: String,
    tags: Vec<SuggestedTag>,
}

/// Handle the `tags` command.
pub(crate) fn handle_tags_command(path: &Path, limit: usize, format: OutputFormat) -> Result<()> {
    let templates = read_templates(path)?;
    let suggestions = suggest(&templates, limit);

    match format {
        OutputFormat::Json => print_json(&suggestions),
        OutputFormat::Text => {
            for entry in &suggestions {
                println!("{}", render_line(entry));
            }
            Ok(())
        }
    }
}

fn suggest(templates: &[Template], limit: usize) -> Vec<TagSuggestions> {
    templates
        .iter()
        .map(|t| TagSuggestions {
            template_id: t.id.clone(),
            title: display_name(t).to_string(),
            tags: generate_tags_with_limit(t, limit),
        })
        .collect()
}

fn render_line(entry: &TagSuggestions) -> String {
    if entry.tags.is_empty() {
        return format!("{}: no tags suggested", entry.title);
    }

    let tags: Vec<String> = entry
        .tags
        .iter()
        .map(|t| format!("{} ({})", t.tag, t.confidence))
        .collect();
    format!("{}: {}", entry.title, tags.join(", "))
}
