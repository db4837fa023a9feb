//! CLI handler for the `search` command.

use super::{print_json, read_templates};
use crate::OutputFormat;
use anyhow::{bail, Result};
use std::path::Path;
use tplscore_scoring::{search_templates, SearchHit};

/// Handle the `search` command.
pub(crate) fn handle_search_command(
    query: &str,
    path: &Path,
    threshold: f64,
    format: OutputFormat,
) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("Threshold must be between 0.0 and 1.0, got {}", threshold);
    }

    let templates = read_templates(path)?;
    let hits = search_templates(query, &templates, threshold);

    match format {
        OutputFormat::Json => print_json(&hits),
        OutputFormat::Text => {
            if hits.is_empty() {
                println!("No templates match \"{}\".", query);
            }
            for line in render_lines(&hits) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn render_lines(hits: &[SearchHit]) -> Vec<String> {
    hits.iter()
        .map(|hit| {
            format!(
                "{:.0}%  {} [{}] via {}",
                hit.similarity * 100.0,
                hit.title,
                hit.template_id,
                hit.matched_field.label()
            )
        })
        .collect()
}
