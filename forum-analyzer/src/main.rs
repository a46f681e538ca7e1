//! Forum Analyzer - analyze discussion posts and draft governance proposals.
//!
//! Reads canonical posts from a JSON file and writes the batch report to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use forum_analyzer::{DiscussionPipeline, Post};
use forum_common::config::Config;
use forum_common::logging::init_logging;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

/// Analyze community discussions and synthesize proposal drafts.
#[derive(Parser, Debug)]
#[command(name = "forum-analyzer")]
#[command(author = "theonlyhennygod")]
#[command(version)]
#[command(about = "Community discussion analysis and governance proposal drafting", long_about = None)]
struct Cli {
    /// JSON file holding an array of posts
    posts: PathBuf,

    /// Config file (default: ~/.forum-analyzer/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Override the proposal threshold
    #[arg(long)]
    threshold: Option<f64>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides()?;
    if let Some(threshold) = cli.threshold {
        config.analysis.proposal_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Forum Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let raw = std::fs::read_to_string(&cli.posts)
        .with_context(|| format!("Failed to read posts from {}", cli.posts.display()))?;
    let posts: Vec<Post> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse posts from {}", cli.posts.display()))?;

    let pipeline = DiscussionPipeline::from_config(&config)?;
    let report = pipeline.run(&posts);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => print!("{}", report.to_markdown(pipeline.analysis_options())),
    }

    Ok(())
}
