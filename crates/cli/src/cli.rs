use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `tplscore` application.
#[derive(Debug, Parser)]
#[command(
    name = "tplscore",
    version,
    about = "Quality scores, tag suggestions, and recommendations for project templates"
)]
pub struct Cli {
    /// Output format (overrides `TPLSCORE_FORMAT`).
    #[arg(long, global = true, value_enum, env = "TPLSCORE_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `tplscore` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scores template quality (completeness, clarity, uniqueness, engagement).
    Quality {
        /// JSON file holding one template or an array of templates.
        #[arg(value_name = "FILE")]
        templates: PathBuf,
        /// Prints an aggregate summary even for a single template.
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    /// Suggests tags from template text.
    Tags {
        /// JSON file holding one template or an array of templates.
        #[arg(value_name = "FILE")]
        templates: PathBuf,
        /// Maximum tags per template.
        #[arg(long, env = "TPLSCORE_TAG_LIMIT", default_value_t = tplscore_scoring::DEFAULT_TAG_LIMIT)]
        limit: usize,
    },
    /// Recommends templates from a user's history.
    Recommend {
        /// JSON file with the user's history.
        #[arg(long, value_name = "FILE")]
        history: PathBuf,
        /// JSON file with candidate templates.
        #[arg(long, value_name = "FILE")]
        templates: PathBuf,
        /// User identifier, used for log context.
        #[arg(long, default_value = "anonymous")]
        user: String,
        /// Maximum recommendations returned.
        #[arg(long, env = "TPLSCORE_RECOMMEND_LIMIT", default_value_t = tplscore_scoring::DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,
    },
    /// Fuzzy-searches templates by title, description, and tags.
    Search {
        /// Free-text query.
        #[arg(required = true)]
        query: String,
        /// JSON file with templates to search.
        #[arg(long, value_name = "FILE")]
        templates: PathBuf,
        /// Minimum similarity (0.0 - 1.0).
        #[arg(long, env = "TPLSCORE_SEARCH_THRESHOLD", default_value_t = tplscore_scoring::DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}
