//! Rule-based tag suggestions from template text.
//!
//! Each rule pairs a pattern with a tag and a weight. A matching rule yields
//! a confidence of `min(weight * (0.6 + 0.1 * occurrences), 1.0)`, so tags
//! mentioned repeatedly rank higher.

use crate::{Confidence, Template};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Maximum number of suggestions returned by [`generate_tags`].
pub const DEFAULT_TAG_LIMIT: usize = 8;

/// A suggested tag with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTag {
    pub tag: String,
    pub confidence: Confidence,
}

struct TagRule {
    pattern: Regex,
    tag: &'static str,
    weight: f64,
}

// Patterns run against lower-cased text.
const RULE_TABLE: &[(&str, &str, f64)] = &[
    (r"react|jsx|component", "react", 1.0),
    (r"next\.?js", "nextjs", 1.0),
    (r"vue|nuxt", "vue", 1.0),
    (r"svelte", "svelte", 1.0),
    (r"angular", "angular", 1.0),
    (r"typescript|\bts\b|\.tsx?\b", "typescript", 0.9),
    (r"tailwind", "tailwindcss", 0.9),
    (r"node\.?js|express", "nodejs", 0.9),
    (r"python|django|flask|fastapi", "python", 0.9),
    (r"dashboard|admin panel", "dashboard", 0.8),
    (r"e-?commerce|shopping cart|storefront", "ecommerce", 0.8),
    (r"\bblog\b|article", "blog", 0.8),
    (r"landing page|hero section", "landing-page", 0.8),
    (r"portfolio", "portfolio", 0.8),
    (r"\bauth\b|authentication|login|oauth|jwt", "authentication", 0.8),
    (r"stripe|payment|checkout|billing|subscription", "payments", 0.8),
    (r"supabase|postgres|mysql|sqlite|mongodb|database", "database", 0.7),
    (r"graphql|\bapi\b|\brest(ful)?\b|endpoint", "api", 0.7),
    (r"\bai\b|openai|\bllm\b|\bgpt\b|machine learning", "ai", 0.7),
    (r"mobile|react native|\bios\b|android", "mobile", 0.7),
    (r"docker|kubernetes|container", "devops", 0.6),
    (r"\btests?\b|testing|jest|vitest|playwright", "testing", 0.6),
];

static TAG_RULES: LazyLock<Vec<TagRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, tag, weight)| TagRule {
            pattern: Regex::new(pattern).expect("TAG_RULES: compile-time constant"),
            tag,
            weight,
        })
        .collect()
});

/// Suggest up to [`DEFAULT_TAG_LIMIT`] tags for a template.
pub fn generate_tags(template: &Template) -> Vec<SuggestedTag> {
    generate_tags_with_limit(template, DEFAULT_TAG_LIMIT)
}

/// Suggest up to `limit` tags, highest confidence first.
///
/// Ties keep rule-table order, so output is stable for identical text.
pub fn generate_tags_with_limit(template: &Template, limit: usize) -> Vec<SuggestedTag> {
    let text = template.searchable_text();

    let mut tags: Vec<SuggestedTag> = TAG_RULES
        .iter()
        .filter_map(|rule| {
            let occurrences = rule.pattern.find_iter(&text).count();
            if occurrences == 0 {
                return None;
            }
            tracing::trace!(
                target: "tplscore::tagger",
                tag = rule.tag,
                occurrences,
                "Tag rule matched"
            );
            Some(SuggestedTag {
                tag: rule.tag.to_string(),
                confidence: Confidence::from_occurrences(rule.weight, occurrences),
            })
        })
        .collect();

    tags.sort_by(|a, b| b.confidence.value().total_cmp(&a.confidence.value()));
    tags.truncate(limit);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(title: &str, description: &str, content: &str) -> Template {
        Template {
            title: title.to_string(),
            description: description.to_string(),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    fn tag_names(tags: &[SuggestedTag]) -> Vec<&str> {
        tags.iter().map(|t| t.tag.as_str()).collect()
    }

    #[test]
    fn test_rule_table_compiles() {
        assert_eq!(TAG_RULES.len(), RULE_TABLE.len());
    }

    #[test]
    fn test_react_dashboard_tags() {
        let tags = generate_tags(&template(
            "React Dashboard",
            "A Next.js TypeScript dashboard with Tailwind CSS",
            "",
        ));
        let names = tag_names(&tags);

        for expected in ["nextjs", "react", "typescript", "tailwindcss", "dashboard"] {
            assert!(names.contains(&expected), "missing {expected}: {names:?}");
        }
    }

    #[test]
    fn test_confidence_grows_with_occurrences() {
        let tags = generate_tags(&template(
            "Dashboard",
            "dashboard dashboard with a react component",
            "",
        ));
        // dashboard: 0.8 * (0.6 + 0.3) = 0.72; react: 1.0 * (0.6 + 0.2) = 0.8
        let dashboard = tags.iter().find(|t| t.tag == "dashboard").unwrap();
        let react = tags.iter().find(|t| t.tag == "react").unwrap();
        assert!((dashboard.confidence.value() - 0.72).abs() < 1e-9);
        assert!((react.confidence.value() - 0.8).abs() < 1e-9);
        assert_eq!(tags[0].tag, "react");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tags = generate_tags(&template("SVELTE Starter", "", ""));
        assert_eq!(tag_names(&tags), vec!["svelte"]);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(generate_tags(&template("Untitled", "plain words", "")).is_empty());
        assert!(generate_tags(&Template::default()).is_empty());
    }

    #[test]
    fn test_results_truncated_and_sorted() {
        let text = "react next.js vue svelte angular typescript tailwind express \
                    python dashboard ecommerce blog portfolio login stripe postgres graphql";
        let tags = generate_tags(&template("Kitchen sink", text, ""));

        assert_eq!(tags.len(), DEFAULT_TAG_LIMIT);
        assert!(tags
            .windows(2)
            .all(|w| w[0].confidence.value() >= w[1].confidence.value()));
    }

    #[test]
    fn test_custom_limit() {
        let tags = generate_tags_with_limit(
            &template("React Dashboard", "A Next.js TypeScript dashboard", ""),
            2,
        );
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_ties_keep_rule_order() {
        let tags = generate_tags(&template("svelte angular", "", ""));
        assert_eq!(tag_names(&tags), vec!["svelte", "angular"]);
    }

    #[test]
    fn test_content_contributes() {
        let tags = generate_tags(&template("Starter", "", "Uses Docker for local dev"));
        assert_eq!(tag_names(&tags), vec!["devops"]);
    }
}
