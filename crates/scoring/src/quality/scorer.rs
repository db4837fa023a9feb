//! Point-band scoring for each quality dimension.

use super::{QualityAnalysis, QualityDimension, QualityScore};
use crate::Template;
use std::collections::HashSet;

const MAX_SCORE: u32 = 100;

// Completeness bands.
const TITLE_MIN_CHARS: usize = 10;
const TITLE_POINTS: u32 = 20;
const DESCRIPTION_MIN_CHARS: usize = 100;
const DESCRIPTION_POINTS: u32 = 30;
const CONTENT_MIN_CHARS: usize = 200;
const CONTENT_POINTS: u32 = 30;
const MIN_TAGS: usize = 3;
const TAGS_POINTS: u32 = 20;

// Clarity bands.
const CLARITY_BASE: u32 = 50;
const WORDS_TIER_ONE: usize = 50;
const WORDS_TIER_ONE_POINTS: u32 = 20;
const WORDS_TIER_TWO: usize = 100;
const WORDS_TIER_TWO_POINTS: u32 = 10;
const PUNCTUATION_POINTS: u32 = 10;
const SENTENCE_WORDS_MIN: f64 = 10.0;
const SENTENCE_WORDS_MAX: f64 = 25.0;
const SENTENCE_LENGTH_POINTS: u32 = 10;

// Uniqueness bands.
const UNIQUENESS_BASE: u32 = 60;
const DISTINCT_WORDS_MIN: usize = 50;
const DISTINCT_WORDS_POINTS: u32 = 20;
const LONG_TITLE_CHARS: usize = 20;
const LONG_TITLE_POINTS: u32 = 10;
const RICH_TAGS: usize = 5;
const RICH_TAGS_POINTS: u32 = 10;

// Engagement bands, highest threshold first.
const ENGAGEMENT_BASE: u32 = 25;
const VIEW_BANDS: [(u64, u32); 3] = [(100, 25), (50, 15), (10, 5)];
const GENERATION_BANDS: [(u64, u32); 3] = [(50, 25), (20, 15), (5, 5)];
const CONVERSION_BANDS: [(f64, u32); 3] = [(0.5, 25), (0.25, 15), (0.1, 5)];

const DIMENSION_WEIGHT: f64 = 0.25;

/// Calculate the composite quality score for a template.
///
/// Total over its input: empty strings and collections simply earn no bonus
/// points.
pub fn calculate_quality_score(template: &Template) -> QualityScore {
    let completeness = completeness_score(template);
    let clarity = clarity_score(&template.description);
    let uniqueness = uniqueness_score(template);
    let engagement = engagement_score(template.views, template.generations);

    let overall = ((completeness + clarity + uniqueness + engagement) as f64 * DIMENSION_WEIGHT)
        .round() as u32;

    tracing::debug!(
        target: "tplscore::quality",
        template = %template.id,
        overall,
        completeness,
        clarity,
        uniqueness,
        engagement,
        "Scored template quality"
    );

    QualityScore {
        overall,
        completeness,
        clarity,
        uniqueness,
        engagement,
        analysis: QualityAnalysis::from_dimensions(&[
            (QualityDimension::Completeness, completeness),
            (QualityDimension::Clarity, clarity),
            (QualityDimension::Uniqueness, uniqueness),
            (QualityDimension::Engagement, engagement),
        ]),
    }
}

fn completeness_score(template: &Template) -> u32 {
    let mut score = 0;

    if char_len(&template.title) >= TITLE_MIN_CHARS {
        score += TITLE_POINTS;
    }
    if char_len(&template.description) >= DESCRIPTION_MIN_CHARS {
        score += DESCRIPTION_POINTS;
    }
    if char_len(template.content()) >= CONTENT_MIN_CHARS {
        score += CONTENT_POINTS;
    }
    if template.tags.len() >= MIN_TAGS {
        score += TAGS_POINTS;
    }

    score.min(MAX_SCORE)
}

fn clarity_score(description: &str) -> u32 {
    let mut score = CLARITY_BASE;
    let word_count = description.split_whitespace().count();

    if word_count >= WORDS_TIER_ONE {
        score += WORDS_TIER_ONE_POINTS;
        if word_count >= WORDS_TIER_TWO {
            score += WORDS_TIER_TWO_POINTS;
        }
    }

    if description.contains(['?', '!']) {
        score += PUNCTUATION_POINTS;
    }

    if let Some(mean) = mean_sentence_length(description) {
        if (SENTENCE_WORDS_MIN..=SENTENCE_WORDS_MAX).contains(&mean) {
            score += SENTENCE_LENGTH_POINTS;
        }
    }

    score.min(MAX_SCORE)
}

fn uniqueness_score(template: &Template) -> u32 {
    let mut score = UNIQUENESS_BASE;

    if distinct_words(&template.description) >= DISTINCT_WORDS_MIN {
        score += DISTINCT_WORDS_POINTS;
    }
    if char_len(&template.title) >= LONG_TITLE_CHARS {
        score += LONG_TITLE_POINTS;
    }
    if template.tags.len() >= RICH_TAGS {
        score += RICH_TAGS_POINTS;
    }

    score.min(MAX_SCORE)
}

fn engagement_score(views: u64, generations: u64) -> u32 {
    let mut score = ENGAGEMENT_BASE;

    score += band_points(views, &VIEW_BANDS);
    score += band_points(generations, &GENERATION_BANDS);

    if views > 0 {
        let conversion = generations as f64 / views as f64;
        score += CONVERSION_BANDS
            .iter()
            .find(|(min, _)| conversion >= *min)
            .map_or(0, |(_, points)| *points);
    }

    score.min(MAX_SCORE)
}

fn band_points(value: u64, bands: &[(u64, u32)]) -> u32 {
    bands
        .iter()
        .find(|(min, _)| value >= *min)
        .map_or(0, |(_, points)| *points)
}

/// Mean words per sentence, or `None` when there are no sentences.
fn mean_sentence_length(text: &str) -> Option<f64> {
    let lengths: Vec<usize> = text
        .split(['.', '!', '?'])
        .map(|sentence| sentence.split_whitespace().count())
        .filter(|&words| words > 0)
        .collect();

    if lengths.is_empty() {
        return None;
    }

    Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
}

fn distinct_words(text: &str) -> usize {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{}", i)).collect()
    }

    /// `sentences` sentences of `words_per_sentence` distinct words each.
    fn prose(sentences: usize, words_per_sentence: usize) -> String {
        (0..sentences)
            .map(|s| {
                let words: Vec<String> = (0..words_per_sentence)
                    .map(|w| format!("word{}", s * words_per_sentence + w))
                    .collect();
                format!("{}.", words.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn full_template() -> Template {
        Template {
            id: "full".into(),
            title: "Production SaaS Starter Kit".into(),
            description: prose(10, 12),
            content: Some("x".repeat(250)),
            category: "saas".into(),
            tags: tags(5),
            views: 500,
            generations: 300,
            rating: Some(4.8),
        }
    }

    #[test]
    fn test_minimal_template() {
        let template = Template {
            title: "x".into(),
            content: Some(String::new()),
            ..Default::default()
        };
        let score = calculate_quality_score(&template);

        assert_eq!(score.completeness, 0);
        assert_eq!(score.clarity, 50);
        assert_eq!(score.uniqueness, 60);
        assert_eq!(score.engagement, 25);
        // (0 + 50 + 60 + 25) / 4 = 33.75
        assert_eq!(score.overall, 34);
        assert!(score.overall < calculate_quality_score(&full_template()).overall);
    }

    #[test]
    fn test_full_template_maxes_out() {
        let score = calculate_quality_score(&full_template());

        assert_eq!(score.completeness, 100);
        assert_eq!(score.clarity, 90);
        assert_eq!(score.uniqueness, 100);
        assert_eq!(score.engagement, 100);
        assert_eq!(score.overall, 98);
        assert_eq!(score.analysis.strengths.len(), 4);
        assert!(score.analysis.improvements.is_empty());
    }

    #[test]
    fn test_completeness_bands_are_independent() {
        let template = Template {
            title: "Exactly10!".into(),
            tags: tags(3),
            ..Default::default()
        };
        assert_eq!(completeness_score(&template), 40);

        let template = Template {
            description: "d".repeat(100),
            content: Some("c".repeat(199)),
            ..Default::default()
        };
        assert_eq!(completeness_score(&template), 30);
    }

    #[test]
    fn test_completeness_counts_chars_not_bytes() {
        // 10 characters, 20 bytes.
        let template = Template {
            title: "é".repeat(10),
            ..Default::default()
        };
        assert_eq!(completeness_score(&template), TITLE_POINTS);
    }

    #[test]
    fn test_clarity_word_tiers() {
        // One 60-word sentence: no sentence-length bonus.
        assert_eq!(clarity_score(&prose(1, 60)), 70);
        // One 120-word sentence.
        assert_eq!(clarity_score(&prose(1, 120)), 80);
    }

    #[test]
    fn test_clarity_punctuation_bonus() {
        assert_eq!(clarity_score("Ready to ship?"), 60);
        assert_eq!(clarity_score("Ship it!"), 60);
    }

    #[test]
    fn test_clarity_balanced_sentences() {
        // Three 12-word sentences: 36 words, mean 12.
        assert_eq!(clarity_score(&prose(3, 12)), 60);
        // Mean of 5 words falls outside the band.
        assert_eq!(clarity_score(&prose(3, 5)), 50);
    }

    #[test]
    fn test_clarity_capped() {
        let text = format!("{} Really?", prose(10, 12));
        assert_eq!(clarity_score(&text), MAX_SCORE);
    }

    #[test]
    fn test_mean_sentence_length_ignores_empty_fragments() {
        assert_eq!(mean_sentence_length("One two. Three four!!  ...  "), Some(2.0));
        assert_eq!(mean_sentence_length("   "), None);
    }

    #[test]
    fn test_distinct_words_normalizes_case_and_punctuation() {
        assert_eq!(distinct_words("Rust rust, RUST. cargo"), 2);
    }

    #[test]
    fn test_uniqueness_bands() {
        let template = Template {
            title: "A twenty char title!".into(),
            tags: tags(5),
            ..Default::default()
        };
        assert_eq!(uniqueness_score(&template), 80);

        let template = Template {
            description: prose(1, 50),
            ..Default::default()
        };
        assert_eq!(uniqueness_score(&template), 80);
    }

    #[test]
    fn test_engagement_bands() {
        assert_eq!(engagement_score(0, 0), 25);
        assert_eq!(engagement_score(10, 0), 30);
        assert_eq!(engagement_score(50, 0), 40);
        assert_eq!(engagement_score(100, 0), 50);
        // 5 / 100 = 0.05 conversion: no bonus.
        assert_eq!(engagement_score(100, 5), 55);
        // 20 / 100 = 0.2 conversion: +5.
        assert_eq!(engagement_score(100, 20), 70);
        // 25 / 100 = 0.25 conversion: +15.
        assert_eq!(engagement_score(100, 25), 80);
    }

    #[test]
    fn test_engagement_zero_views_skips_conversion() {
        // Generations without views cannot divide; only generation bands apply.
        assert_eq!(engagement_score(0, 50), 50);
    }

    #[test]
    fn test_engagement_capped() {
        assert_eq!(engagement_score(10_000, 10_000), MAX_SCORE);
    }

    #[test]
    fn test_analysis_flags_weak_dimensions() {
        let template = Template {
            title: "x".into(),
            ..Default::default()
        };
        let score = calculate_quality_score(&template);

        assert!(score.analysis.strengths.is_empty());
        assert!(score
            .analysis
            .improvements
            .contains(&QualityDimension::Completeness.improvement().to_string()));
        assert!(score
            .analysis
            .improvements
            .contains(&QualityDimension::Engagement.improvement().to_string()));
        // Uniqueness sits at exactly 60: neither strength nor improvement.
        assert!(!score
            .analysis
            .improvements
            .contains(&QualityDimension::Uniqueness.improvement().to_string()));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let template = full_template();
        assert_eq!(
            calculate_quality_score(&template),
            calculate_quality_score(&template)
        );
    }

    #[test]
    fn test_long_title_rich_tags_and_balanced_prose() {
        let template = Template {
            title: "Twenty-plus character title".into(),
            description: prose(10, 12),
            tags: tags(5),
            ..Default::default()
        };
        let score = calculate_quality_score(&template);
        assert!(score.uniqueness >= 90);
        assert!(score.clarity >= 90);
    }
}
