//! Generate human-readable reasons for recommendations.

use super::RecommendationSignal;

/// Join the description of each triggered rule with ", ".
pub fn generate_reason(signals: &[RecommendationSignal]) -> String {
    signals
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(signal: &RecommendationSignal) -> String {
    match signal {
        RecommendationSignal::CategoryMatch { category } => {
            format!("Matches your interest in {}", category)
        }
        RecommendationSignal::TagOverlap { tags } => {
            if tags.len() == 1 {
                format!("Tagged with {}", tags[0])
            } else {
                format!("Shares {} of your favorite tags", tags.len())
            }
        }
        RecommendationSignal::Popular { views } => format!("Popular ({} views)", views),
        RecommendationSignal::HighlyRated { rating } => format!("Highly rated ({:.2}/5)", rating),
    }
}

/// Generate a summary line for a batch of recommendations.
pub fn summarize_recommendations(count: usize, candidates: usize, viewed: usize) -> String {
    let mut parts = vec![format!(
        "Found {} recommendations from {} templates",
        count, candidates
    )];

    if viewed > 0 {
        parts.push(format!("skipping {} already viewed", viewed));
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signals() {
        assert_eq!(generate_reason(&[]), "");
    }

    #[test]
    fn test_single_signal() {
        let signals = vec![RecommendationSignal::CategoryMatch {
            category: "dashboards".into(),
        }];
        assert_eq!(generate_reason(&signals), "Matches your interest in dashboards");
    }

    #[test]
    fn test_tag_overlap_wording() {
        let one = vec![RecommendationSignal::TagOverlap {
            tags: vec!["react".into()],
        }];
        let many = vec![RecommendationSignal::TagOverlap {
            tags: vec!["react".into(), "nextjs".into()],
        }];
        assert_eq!(generate_reason(&one), "Tagged with react");
        assert_eq!(generate_reason(&many), "Shares 2 of your favorite tags");
    }

    #[test]
    fn test_multiple_signals_comma_joined() {
        let signals = vec![
            RecommendationSignal::Popular { views: 250 },
            RecommendationSignal::HighlyRated { rating: 4.8 },
        ];
        assert_eq!(
            generate_reason(&signals),
            "Popular (250 views), Highly rated (4.80/5)"
        );
    }

    #[test]
    fn test_rating_near_five_is_not_rounded_up() {
        let signals = vec![RecommendationSignal::HighlyRated { rating: 4.96 }];
        assert_eq!(generate_reason(&signals), "Highly rated (4.96/5)");
    }

    #[test]
    fn test_summarize() {
        assert_eq!(
            summarize_recommendations(3, 10, 2),
            "Found 3 recommendations from 10 templates, skipping 2 already viewed"
        );
        assert_eq!(
            summarize_recommendations(0, 4, 0),
            "Found 0 recommendations from 4 templates"
        );
    }
}
