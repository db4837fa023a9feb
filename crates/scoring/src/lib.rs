//! Quality scoring, auto-tagging, and recommendations for project templates.
//!
//! This crate provides:
//! - A composite 0-100 quality score with a strengths/improvements analysis
//! - Rule-based tag suggestions from template text
//! - Personalized recommendations from a user's interaction history
//! - Fuzzy template search using trigram similarity
//!
//! Every scoring function is pure and synchronous. Loading templates from disk
//! lives in [`input`] and is the only fallible surface.
//!
//! # Example
//!
//! ```rust
//! use tplscore_scoring::{calculate_quality_score, generate_tags, Template};
//!
//! let template = Template {
//!     title: "React Dashboard".to_string(),
//!     description: "A Next.js TypeScript dashboard with Tailwind CSS".to_string(),
//!     ..Default::default()
//! };
//!
//! let score = calculate_quality_score(&template);
//! assert!(score.overall <= 100);
//!
//! let tags = generate_tags(&template);
//! assert!(tags.iter().any(|t| t.tag == "react"));
//! ```

#![deny(unsafe_code)]

pub mod input;
pub mod quality;
pub mod recommend;
pub mod search;
pub mod tagger;
mod template;
mod types;

pub use input::{load_history, load_templates, parse_templates, InputError};
pub use quality::{
    calculate_quality_score, QualityAnalysis, QualityDimension, QualityGrade, QualityScore,
    QualitySummary,
};
pub use recommend::{
    generate_recommendations, Recommendation, RecommendationScorer, RecommendationSignal,
    DEFAULT_RECOMMENDATION_LIMIT,
};
pub use search::{search_templates, MatchedField, SearchHit, DEFAULT_THRESHOLD};
pub use tagger::{generate_tags, generate_tags_with_limit, SuggestedTag, DEFAULT_TAG_LIMIT};
pub use template::{Template, UserHistory};
pub use types::Confidence;
