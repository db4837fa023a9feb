//! Command-line front end for template scoring.
//!
//! Reads templates and user history from JSON files, runs the scorers in
//! `tplscore-scoring`, and prints text or JSON.

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Commands, OutputFormat};

use anyhow::Result;
use clap::Parser;

/// The main entry point for the `tplscore` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    config::apply_config_to_env();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Quality { templates, summary } => {
            commands::handle_quality_command(&templates, summary, format)
        }
        Commands::Tags { templates, limit } => {
            commands::handle_tags_command(&templates, limit, format)
        }
        Commands::Recommend {
            history,
            templates,
            user,
            limit,
        } => commands::handle_recommend_command(&history, &templates, &user, limit, format),
        Commands::Search {
            query,
            templates,
            threshold,
        } => commands::handle_search_command(&query, &templates, threshold, format),
    }
}
