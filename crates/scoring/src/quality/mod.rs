//! Template quality scoring.
//!
//! A [`QualityScore`] combines four equally weighted dimensions, each on a
//! 0-100 scale, and carries a short analysis listing which dimensions are
//! strong (>= 80) and which need work (< 60).

mod scorer;
mod summary;

pub use scorer::calculate_quality_score;
pub use summary::{GradeCounts, QualityGrade, QualitySummary};

use serde::{Deserialize, Serialize};

/// Score at or above which a dimension is reported as a strength.
pub const STRENGTH_THRESHOLD: u32 = 80;
/// Score below which a dimension is reported as needing improvement.
pub const IMPROVEMENT_THRESHOLD: u32 = 60;

/// Composite quality score for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Equal-weighted average of the four dimensions, rounded.
    pub overall: u32,
    /// Metadata and body completeness.
    pub completeness: u32,
    /// Readability of the description.
    pub clarity: u32,
    /// Vocabulary richness and specificity.
    pub uniqueness: u32,
    /// Views, evaluations, and conversion.
    pub engagement: u32,
    /// Threshold-triggered feedback.
    pub analysis: QualityAnalysis,
}

impl QualityScore {
    /// Score for a single dimension.
    pub fn dimension(&self, dimension: QualityDimension) -> u32 {
        match dimension {
            QualityDimension::Completeness => self.completeness,
            QualityDimension::Clarity => self.clarity,
            QualityDimension::Uniqueness => self.uniqueness,
            QualityDimension::Engagement => self.engagement,
        }
    }

    /// Grade bucket for the overall score.
    pub fn grade(&self) -> QualityGrade {
        QualityGrade::from_score(self.overall)
    }
}

/// Strengths and improvement suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl QualityAnalysis {
    /// Build the analysis from per-dimension scores, in dimension order.
    pub fn from_dimensions(scores: &[(QualityDimension, u32)]) -> Self {
        let mut analysis = Self::default();
        for &(dimension, score) in scores {
            if score >= STRENGTH_THRESHOLD {
                analysis.strengths.push(dimension.strength().to_string());
            } else if score < IMPROVEMENT_THRESHOLD {
                analysis.improvements.push(dimension.improvement().to_string());
            }
        }
        analysis
    }
}

/// The four scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityDimension {
    Completeness,
    Clarity,
    Uniqueness,
    Engagement,
}

impl QualityDimension {
    /// All dimensions in reporting order.
    pub const ALL: [QualityDimension; 4] = [
        Self::Completeness,
        Self::Clarity,
        Self::Uniqueness,
        Self::Engagement,
    ];

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completeness => "completeness",
            Self::Clarity => "clarity",
            Self::Uniqueness => "uniqueness",
            Self::Engagement => "engagement",
        }
    }

    /// Feedback when the dimension scores high.
    pub fn strength(&self) -> &'static str {
        match self {
            Self::Completeness => "Well-documented with complete metadata",
            Self::Clarity => "Clear and well-structured description",
            Self::Uniqueness => "Distinctive content with rich vocabulary",
            Self::Engagement => "Strong community engagement",
        }
    }

    /// Feedback when the dimension scores low.
    pub fn improvement(&self) -> &'static str {
        match self {
            Self::Completeness => {
                "Add a longer title, a detailed description, template content, and at least 3 tags"
            }
            Self::Clarity => "Expand the description and keep sentences between 10 and 25 words",
            Self::Uniqueness => "Use more specific wording and add tags that set the template apart",
            Self::Engagement => "Promote the template to attract more views and evaluations",
        }
    }
}
