//! Configuration management for the forum analyzer.
//!
//! The analyzer reads an optional configuration file at
//! `~/.forum-analyzer/config.json`. Every field has a default, so a missing
//! file or a partial file is valid.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (FORUM_* prefix)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `FORUM_LOG_LEVEL` → observability.log_level
//! - `FORUM_LOG_FORMAT` → observability.log_format
//! - `FORUM_PROPOSAL_THRESHOLD` → analysis.proposal_threshold
//! - `FORUM_WORKERS` → workers

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".forum-analyzer"),
        |dirs| dirs.home_dir().join(".forum-analyzer"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-post analysis options
    #[serde(default)]
    pub analysis: AnalysisOptions,

    /// Proposal draft generation options
    #[serde(default)]
    pub proposal: ProposalOptions,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Size of the worker pool used for batch analysis.
    /// `None` uses the global rayon pool.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Apply `FORUM_*` environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `FORUM_*` overrides read through `lookup`.
    ///
    /// An unparsable numeric override is an error rather than being skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("FORUM_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("FORUM_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Some(threshold) = lookup("FORUM_PROPOSAL_THRESHOLD") {
            self.analysis.proposal_threshold = threshold
                .trim()
                .parse()
                .with_context(|| format!("Invalid FORUM_PROPOSAL_THRESHOLD: {:?}", threshold))?;
        }
        if let Some(workers) = lookup("FORUM_WORKERS") {
            let workers = workers
                .trim()
                .parse()
                .with_context(|| format!("Invalid FORUM_WORKERS: {:?}", workers))?;
            self.workers = Some(workers);
        }
        Ok(())
    }
}

// ============================================================================
// Analysis Options
// ============================================================================

/// Options for per-post discussion analysis.
///
/// These never change what is computed for a post. They only gate how the
/// results are consumed: proposal candidacy and which figures reports show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Minimum engagement score (0-1) a post needs to be considered for a proposal
    #[serde(default)]
    pub min_engagement_threshold: f64,

    /// Proposal potential a post must exceed to trigger a draft
    #[serde(default = "default_proposal_threshold")]
    pub proposal_threshold: f64,

    /// Show sentiment in reports
    #[serde(default = "default_true")]
    pub include_sentiment: bool,

    /// Show consensus in reports
    #[serde(default = "default_true")]
    pub include_consensus: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_engagement_threshold: 0.0,
            proposal_threshold: default_proposal_threshold(),
            include_sentiment: true,
            include_consensus: true,
        }
    }
}

// ============================================================================
// Proposal Options
// ============================================================================

/// Options for proposal draft generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalOptions {
    /// Attach a temperature check poll to the draft
    #[serde(default = "default_true")]
    pub include_temperature_check: bool,

    /// Poll duration in days
    #[serde(default = "default_poll_duration_days")]
    pub poll_duration_days: u32,

    /// Minimum participation ratio for the poll to count
    #[serde(default = "default_participation_threshold")]
    pub minimum_participation_threshold: f64,

    /// Flag treasury drafts as requiring a budget estimate before submission
    #[serde(default = "default_true")]
    pub require_budget_estimate: bool,
}

impl Default for ProposalOptions {
    fn default() -> Self {
        Self {
            include_temperature_check: true,
            poll_duration_days: default_poll_duration_days(),
            minimum_participation_threshold: default_participation_threshold(),
            require_budget_estimate: true,
        }
    }
}

// ============================================================================
// Observability
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_proposal_threshold() -> f64 {
    0.6
}
fn default_poll_duration_days() -> u32 {
    3
}
fn default_participation_threshold() -> f64 {
    0.1
}
fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "pretty".into()
}
fn default_true() -> bool {
    true
}
