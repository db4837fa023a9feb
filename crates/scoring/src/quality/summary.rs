//! Aggregate statistics over many quality scores.

use super::{QualityDimension, QualityScore};
use serde::{Deserialize, Serialize};

/// Grade bucket for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    /// 80 and above.
    Excellent,
    /// 60 - 79.
    Good,
    /// 40 - 59.
    Fair,
    /// Below 40.
    Poor,
}

impl QualityGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeCounts {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

/// Summary of a batch of quality scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualitySummary {
    /// Number of templates scored.
    pub total: usize,
    /// Mean overall score.
    pub avg_overall: f64,
    pub avg_completeness: f64,
    pub avg_clarity: f64,
    pub avg_uniqueness: f64,
    pub avg_engagement: f64,
    /// Templates per grade.
    pub by_grade: GradeCounts,
}

impl QualitySummary {
    pub fn from_scores(scores: &[QualityScore]) -> Self {
        let mut summary = QualitySummary {
            total: scores.len(),
            ..Default::default()
        };

        if scores.is_empty() {
            return summary;
        }

        for score in scores {
            match score.grade() {
                QualityGrade::Excellent => summary.by_grade.excellent += 1,
                QualityGrade::Good => summary.by_grade.good += 1,
                QualityGrade::Fair => summary.by_grade.fair += 1,
                QualityGrade::Poor => summary.by_grade.poor += 1,
            }
        }

        let mean = |value: fn(&QualityScore) -> u32| {
            scores.iter().map(|s| value(s) as f64).sum::<f64>() / scores.len() as f64
        };

        summary.avg_overall = mean(|s| s.overall);
        summary.avg_completeness = mean(|s| s.dimension(QualityDimension::Completeness));
        summary.avg_clarity = mean(|s| s.dimension(QualityDimension::Clarity));
        summary.avg_uniqueness = mean(|s| s.dimension(QualityDimension::Uniqueness));
        summary.avg_engagement = mean(|s| s.dimension(QualityDimension::Engagement));

        summary
    }
}
