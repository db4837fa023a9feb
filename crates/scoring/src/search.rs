//! Trigram-based fuzzy search over templates.
//!
//! Uses the `trigram` crate so that queries with typos ("nextsj",
//! "dashbord") still find the intended templates.

use crate::Template;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use trigram::similarity;

/// Default similarity threshold for fuzzy matching.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Words shorter than this are ignored when matching descriptions.
const MIN_WORD_LEN: usize = 3;

/// A template matching a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub template_id: String,
    pub title: String,
    /// Similarity score (0.0 - 1.0).
    pub similarity: f64,
    pub matched_field: MatchedField,
}

/// Which field contributed the highest similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    Description,
    Tag,
    /// Title and description matched equally.
    Both,
}

impl MatchedField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Tag => "tag",
            Self::Both => "title+description",
        }
    }
}

/// Per-field similarity of one template to a lower-cased query.
#[derive(Debug, Clone, Copy)]
struct FieldScores {
    title: f64,
    description: f64,
    tag: f64,
}

impl FieldScores {
    fn of(needle: &str, template: &Template) -> Self {
        Self {
            title: trigram_score(needle, &template.title),
            description: description_words(&template.description)
                .map(|word| trigram_score(needle, word))
                .fold(0.0, f64::max),
            tag: template
                .tags
                .iter()
                .map(|tag| trigram_score(needle, tag))
                .fold(0.0, f64::max),
        }
    }

    /// Winning score and the field it came from.
    ///
    /// A tag only wins outright; equal title and description scores
    /// report `Both`.
    fn best(self) -> (f64, MatchedField) {
        let text = self.title.max(self.description);
        if self.tag > text {
            return (self.tag, MatchedField::Tag);
        }
        let field = match self.title.total_cmp(&self.description) {
            Ordering::Greater => MatchedField::Title,
            Ordering::Less => MatchedField::Description,
            Ordering::Equal => MatchedField::Both,
        };
        (text, field)
    }
}

/// Trigram similarity of an already lower-cased needle to a candidate.
fn trigram_score(needle: &str, candidate: &str) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }
    f64::from(similarity(needle, &candidate.to_lowercase()))
}

/// Description words long enough to be worth matching.
///
/// Hyphens and dots stay inside words so "next.js" and "server-side"
/// are compared whole.
fn description_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '.'))
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
}

/// Find templates similar to a query.
///
/// Returns non-zero hits at or above `threshold`, highest similarity first.
pub fn search_templates(query: &str, templates: &[Template], threshold: f64) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit> = templates
        .iter()
        .filter_map(|template| {
            let (score, field) = FieldScores::of(&needle, template).best();
            (score >= threshold && score > 0.0).then(|| SearchHit {
                template_id: template.id.clone(),
                title: template.title.clone(),
                similarity: score,
                matched_field: field,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    tracing::debug!(
        target: "tplscore::search",
        query,
        hits = hits.len(),
        "Searched templates"
    );

    hits
}
