//! Configuration validation for the forum analyzer.
//!
//! Checks that thresholds and durations are within their valid ranges
//! before a pipeline is built from the configuration.

use thiserror::Error;

use crate::config::{AnalysisOptions, Config, ObservabilityConfig, ProposalOptions};

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

fn check_ratio(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.into(),
            reason: format!("{value} is outside [0, 1]"),
        });
    }
    Ok(())
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.analysis.validate() {
            errors.push(e);
        }
        if let Err(e) = self.proposal.validate() {
            errors.push(e);
        }
        if let Err(e) = self.observability.validate() {
            errors.push(e);
        }
        if self.workers == Some(0) {
            errors.push(ValidationError::InvalidValue {
                field: "workers".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(ValidationError::Multiple(errors))
        }
    }
}

impl Validate for AnalysisOptions {
    fn validate(&self) -> ValidationResult<()> {
        check_ratio("analysis.min_engagement_threshold", self.min_engagement_threshold)?;
        check_ratio("analysis.proposal_threshold", self.proposal_threshold)
    }
}

impl Validate for ProposalOptions {
    fn validate(&self) -> ValidationResult<()> {
        if self.poll_duration_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: "proposal.poll_duration_days".into(),
                reason: "must be greater than 0".into(),
            });
        }
        check_ratio(
            "proposal.minimum_participation_threshold",
            self.minimum_participation_threshold,
        )
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            });
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            });
        }

        Ok(())
    }
}
