//! Personalized template recommendations from a user's history.

mod explainer;
mod scorer;

pub use explainer::{generate_reason, summarize_recommendations};
pub use scorer::{generate_recommendations, RecommendationScorer, DEFAULT_RECOMMENDATION_LIMIT};

use serde::{Deserialize, Serialize};

/// A recommended template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Recommended template id.
    pub template_id: String,
    /// Combined score (0.0 - 1.0).
    pub score: f64,
    /// Human-readable explanation.
    pub reason: String,
    /// Rules that contributed to the score.
    pub signals: Vec<RecommendationSignal>,
}

/// Rules that contribute to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RecommendationSignal {
    /// Template category is one of the user's favorites.
    CategoryMatch {
        /// Matched category.
        category: String,
    },
    /// Template shares tags with the user's favorites.
    TagOverlap {
        /// Shared tags.
        tags: Vec<String>,
    },
    /// Template has a large audience.
    Popular {
        /// View count.
        views: u64,
    },
    /// Template is highly rated by evaluators.
    HighlyRated {
        /// Average rating.
        rating: f64,
    },
}

impl RecommendationSignal {
    /// Get a short label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CategoryMatch { .. } => "category-match",
            Self::TagOverlap { .. } => "tag-overlap",
            Self::Popular { .. } => "popular",
            Self::HighlyRated { .. } => "highly-rated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_labels() {
        assert_eq!(
            RecommendationSignal::Popular { views: 1 }.label(),
            "popular"
        );
        assert_eq!(
            RecommendationSignal::TagOverlap { tags: vec![] }.label(),
            "tag-overlap"
        );
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = Recommendation {
            template_id: "t1".into(),
            score: 0.5,
            reason: "Popular".into(),
            signals: vec![RecommendationSignal::HighlyRated { rating: 4.9 }],
        };
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["templateId"], "t1");
        assert_eq!(json["signals"][0]["kind"], "highly-rated");
        assert_eq!(json["signals"][0]["rating"], 4.9);
    }
}
