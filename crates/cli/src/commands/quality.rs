//! CLI handler for the `quality` command.

use super::{display_name, print_json, read_templates};
use crate::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tplscore_scoring::{
    calculate_quality_score, QualityDimension, QualityScore, QualitySummary, Template,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredTemplate {
    template_id: String,
    title: String,
    #[serde(flatten)]
    score: QualityScore,
}

#[derive(Debug, Serialize)]
struct QualityReport {
    templates: Vec<ScoredTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<QualitySummary>,
}

/// Handle the `quality` command.
pub(crate) fn handle_quality_command(
    path: &Path,
    summary: bool,
    format: OutputFormat,
) -> Result<()> {
    let templates = read_templates(path)?;
    let report = build_report(&templates, summary);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print!("{}", render_text(&report));
            Ok(())
        }
    }
}

fn build_report(templates: &[Template], summary: bool) -> QualityReport {
    let scored: Vec<ScoredTemplate> = templates
        .iter()
        .map(|t| ScoredTemplate {
            template_id: t.id.clone(),
            title: display_name(t).to_string(),
            score: calculate_quality_score(t),
        })
        .collect();

    let summary = (summary || scored.len() > 1).then(|| {
        let scores: Vec<QualityScore> = scored.iter().map(|s| s.score.clone()).collect();
        QualitySummary::from_scores(&scores)
    });

    QualityReport {
        templates: scored,
        summary,
    }
}

fn render_text(report: &QualityReport) -> String {
    let mut out = String::new();

    for entry in &report.templates {
        let s = &entry.score;
        let _ = writeln!(
            out,
            "{} [{}]: {}/100 ({})",
            entry.title,
            entry.template_id,
            s.overall,
            s.grade().label()
        );
        let dimensions: Vec<String> = QualityDimension::ALL
            .iter()
            .map(|d| format!("{} {}", d.label(), s.dimension(*d)))
            .collect();
        let _ = writeln!(out, "  {}", dimensions.join("  "));
        for strength in &s.analysis.strengths {
            let _ = writeln!(out, "  + {}", strength);
        }
        for improvement in &s.analysis.improvements {
            let _ = writeln!(out, "  - {}", improvement);
        }
    }

    if let Some(summary) = &report.summary {
        let _ = writeln!(
            out,
            "\n{} templates, average {:.1}/100 (excellent {}, good {}, fair {}, poor {})",
            summary.total,
            summary.avg_overall,
            summary.by_grade.excellent,
            summary.by_grade.good,
            summary.by_grade.fair,
            summary.by_grade.poor
        );
    }

    out
}
