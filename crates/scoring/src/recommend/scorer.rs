//! Rule-weighted recommendation scoring.

use super::{explainer, Recommendation, RecommendationSignal};
use crate::{Template, UserHistory};

/// Weights for each recommendation rule.
const CATEGORY_MATCH_WEIGHT: f64 = 0.3;
const TAG_MATCH_WEIGHT: f64 = 0.15;
const POPULARITY_WEIGHT: f64 = 0.2;
const RATING_WEIGHT: f64 = 0.15;

/// Views above which a template counts as popular.
const POPULAR_VIEWS: u64 = 100;
/// Rating at or above which a template counts as highly rated.
const HIGH_RATING: f64 = 4.5;
const MAX_SCORE: f64 = 1.0;

/// Number of recommendations returned by [`generate_recommendations`].
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Scores candidate templates against one user's history.
#[derive(Debug)]
pub struct RecommendationScorer<'a> {
    history: &'a UserHistory,
    limit: usize,
}

impl<'a> RecommendationScorer<'a> {
    /// Create a scorer with the default limit.
    pub fn new(history: &'a UserHistory) -> Self {
        Self {
            history,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Set the maximum number of recommendations returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Collect the rules a template triggers, in rule order.
    pub fn signals(&self, template: &Template) -> Vec<RecommendationSignal> {
        let mut signals = Vec::new();

        if self
            .history
            .favorite_categories
            .iter()
            .any(|c| *c == template.category)
        {
            signals.push(RecommendationSignal::CategoryMatch {
                category: template.category.clone(),
            });
        }

        let shared: Vec<String> = template
            .tags
            .iter()
            .filter(|tag| self.history.favorite_tags.contains(*tag))
            .cloned()
            .collect();
        if !shared.is_empty() {
            signals.push(RecommendationSignal::TagOverlap { tags: shared });
        }

        if template.views > POPULAR_VIEWS {
            signals.push(RecommendationSignal::Popular {
                views: template.views,
            });
        }

        if let Some(rating) = template.rating {
            if rating >= HIGH_RATING {
                signals.push(RecommendationSignal::HighlyRated { rating });
            }
        }

        signals
    }

    /// Score one template.
    ///
    /// Returns `None` for templates the user has viewed and for templates
    /// that trigger no rule.
    pub fn score(&self, template: &Template) -> Option<Recommendation> {
        if self.history.has_viewed(&template.id) {
            tracing::trace!(
                target: "tplscore::recommend",
                template = %template.id,
                "Skipping viewed template"
            );
            return None;
        }

        let signals = self.signals(template);
        let score = signals.iter().map(signal_weight).sum::<f64>().min(MAX_SCORE);
        if score <= 0.0 {
            return None;
        }

        Some(Recommendation {
            template_id: template.id.clone(),
            score,
            reason: explainer::generate_reason(&signals),
            signals,
        })
    }

    /// Score all candidates and keep the top results, highest first.
    ///
    /// Equal scores keep candidate order.
    pub fn recommend(&self, templates: &[Template]) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> =
            templates.iter().filter_map(|t| self.score(t)).collect();

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(self.limit);
        recommendations
    }
}

fn signal_weight(signal: &RecommendationSignal) -> f64 {
    match signal {
        RecommendationSignal::CategoryMatch { .. } => CATEGORY_MATCH_WEIGHT,
        RecommendationSignal::TagOverlap { tags } => TAG_MATCH_WEIGHT * tags.len() as f64,
        RecommendationSignal::Popular { .. } => POPULARITY_WEIGHT,
        RecommendationSignal::HighlyRated { .. } => RATING_WEIGHT,
    }
}

/// Top [`DEFAULT_RECOMMENDATION_LIMIT`] recommendations for a user.
pub fn generate_recommendations(
    user_id: &str,
    history: &UserHistory,
    templates: &[Template],
) -> Vec<Recommendation> {
    let recommendations = RecommendationScorer::new(history).recommend(templates);

    tracing::debug!(
        target: "tplscore::recommend",
        user = user_id,
        candidates = templates.len(),
        returned = recommendations.len(),
        "Generated recommendations"
    );

    recommendations
}
