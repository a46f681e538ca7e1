//! Error types for the forum analyzer.

use thiserror::Error;

/// Result type alias using the forum analyzer error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A post that does not satisfy the canonical shape (empty content, missing author, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An analysis that lacks fields required for proposal templating
    #[error("Malformed analysis: {0}")]
    MalformedAnalysis(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an error with additional context.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error affects a single item and the batch can continue.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::MalformedAnalysis(_) => true,
            Self::WithContext { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }

    /// Short machine-readable kind, used in batch failure listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::MalformedAnalysis(_) => "malformed_analysis",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::WithContext { source, .. } => source.kind(),
        }
    }
}

/// Extension trait for adding context to any error type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::InvalidInput("x".into()).kind(), "invalid_input");
        assert_eq!(Error::MalformedAnalysis("x".into()).kind(), "malformed_analysis");
        assert_eq!(Error::Config("x".into()).kind(), "config");
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::InvalidInput("empty content".into()).is_recoverable());
        assert!(Error::MalformedAnalysis("no author".into()).is_recoverable());
        assert!(!Error::Config("workers must be positive".into()).is_recoverable());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::InvalidInput("empty content".into());
        let with_ctx = err.with_context("post 42");
        assert!(matches!(with_ctx, Error::WithContext { .. }));
        assert!(with_ctx.is_recoverable());
        assert_eq!(with_ctx.kind(), "invalid_input");
        assert_eq!(with_ctx.to_string(), "post 42: Invalid input: empty content");
    }

    #[test]
    fn test_result_ext() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = res.context("reading posts").unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
