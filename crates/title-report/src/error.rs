//! Error types for the title report pipeline.
//!
//! Every fallible library function returns [`Result`], whose error side is
//! [`ReportError`]. Errors serialize as `{ code, message }` so they can be
//! embedded in the JSON output of the CLI.

use crate::config::ConfigValidationError;
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The dataset was not found at the configured location.
    #[error("Missing dataset: {}. Put your CSV in the data/ folder and re-run.", path.display())]
    MissingInput { path: PathBuf },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The genre chart could not be drawn or encoded.
    #[error("Failed to render chart: {0}")]
    ChartRenderFailed(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ReportError>,
    },
}

impl ReportError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ReportError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable, machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "MISSING_INPUT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ChartRenderFailed(_) => "CHART_RENDER_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error means the input file was absent.
    pub fn is_missing_input(&self) -> bool {
        match self {
            Self::MissingInput { .. } => true,
            Self::WithContext { source, .. } => source.is_missing_input(),
            _ => false,
        }
    }
}

impl Serialize for ReportError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ReportError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<ConfigValidationError> for ReportError {
    fn from(err: ConfigValidationError) -> Self {
        ReportError::InvalidConfig(err.to_string())
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReportError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReportError::Io(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let missing = ReportError::MissingInput {
            path: PathBuf::from("data/netflix_titles.csv"),
        };
        assert_eq!(missing.error_code(), "MISSING_INPUT");
        assert_eq!(
            ReportError::ChartRenderFailed("no font".to_string()).error_code(),
            "CHART_RENDER_FAILED"
        );
    }

    #[test]
    fn test_missing_input_message_names_path() {
        let error = ReportError::MissingInput {
            path: PathBuf::from("data/netflix_titles.csv"),
        };
        let message = error.to_string();
        assert!(message.contains("data/netflix_titles.csv"));
        assert!(!message.contains('\n'));
    }

    #[test]
    fn test_is_missing_input_through_context() {
        let error = ReportError::MissingInput {
            path: PathBuf::from("x.csv"),
        }
        .with_context("Resolving input");
        assert!(error.is_missing_input());
        assert!(!ReportError::InvalidConfig("x".to_string()).is_missing_input());
    }

    #[test]
    fn test_error_serialization() {
        let error = ReportError::InvalidConfig("top_n must be at least 1".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("INVALID_CONFIG"));
        assert!(json.contains("top_n"));
    }

    #[test]
    fn test_from_config_validation_error() {
        let error: ReportError = ConfigValidationError::InvalidTopN(0).into();
        assert_eq!(error.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_with_context() {
        let error = ReportError::ChartRenderFailed("no font".to_string())
            .with_context("Rendering genre chart");
        assert!(error.to_string().contains("Rendering genre chart"));
        assert_eq!(error.error_code(), "CHART_RENDER_FAILED");
    }
}
