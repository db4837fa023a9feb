//! CLI handler for the `recommend` command.

use super::{print_json, read_templates};
use crate::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use tplscore_scoring::recommend::summarize_recommendations;
use tplscore_scoring::{load_history, Recommendation, RecommendationScorer};

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    history_path: &Path,
    templates_path: &Path,
    user: &str,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let history = load_history(history_path)
        .with_context(|| format!("Failed to load history from {}", history_path.display()))?;
    let templates = read_templates(templates_path)?;

    let recommendations = RecommendationScorer::new(&history)
        .with_limit(limit)
        .recommend(&templates);

    tracing::info!(
        target: "tplscore::recommend",
        user,
        candidates = templates.len(),
        returned = recommendations.len(),
        "Recommendations ready"
    );

    match format {
        OutputFormat::Json => print_json(&recommendations),
        OutputFormat::Text => {
            let viewed = templates
                .iter()
                .filter(|t| history.viewed_templates.contains(&t.id))
                .count();
            println!(
                "{}",
                summarize_recommendations(recommendations.len(), templates.len(), viewed)
            );
            for line in render_lines(&recommendations) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn render_lines(recommendations: &[Recommendation]) -> Vec<String> {
    recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let kinds: Vec<&str> = rec.signals.iter().map(|s| s.label()).collect();
            format!(
                "{:>2}. {} ({:.2}) - {} [{}]",
                i + 1,
                rec.template_id,
                rec.score,
                rec.reason,
                kinds.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tplscore_test_utils::{dashboard_fan, sample_catalog};

    #[test]
    fn test_render_lines_numbered() {
        let history = dashboard_fan();
        let recs = RecommendationScorer::new(&history).recommend(&sample_catalog());
        let lines = render_lines(&recs);

        // The viewed dashboard is skipped; the SaaS starter leads.
        assert_eq!(recs[0].template_id, "stripe-saas");
        assert!(lines[0].starts_with(" 1. stripe-saas (0.80) - "));
        assert!(lines[0].ends_with("[category-match, tag-overlap, popular, highly-rated]"));
        assert!(recs.iter().all(|r| r.template_id != "react-dashboard"));
    }
}
