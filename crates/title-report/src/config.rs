//! Configuration types for the report pipeline.
//!
//! Paths and thresholds live here instead of in module-level constants so
//! the pipeline can be pointed at scratch directories in tests.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the input dataset, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/netflix_titles.csv";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Configuration for the report pipeline.
///
/// Use [`ReportConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use title_report::ReportConfig;
///
/// let config = ReportConfig::builder()
///     .input_path("fixtures/titles.csv")
///     .output_dir("/tmp/report")
///     .min_release_year(2018)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the titles CSV.
    /// Default: "data/netflix_titles.csv"
    pub input_path: PathBuf,

    /// Directory receiving the chart, clean CSV and summary.
    /// Default: "outputs"
    pub output_dir: PathBuf,

    /// Value of the `type` column to keep, compared case-insensitively.
    /// Default: "movie"
    pub target_category: String,

    /// Lowest `release_year` kept by the filter (inclusive).
    /// Default: 2015
    pub min_release_year: i64,

    /// Number of genres kept in the rank list.
    /// Default: 10
    pub top_n: usize,

    /// Rows scanned by the CSV reader to infer column types.
    /// `None` scans the whole file, so a stray text value deep in a numeric
    /// column widens the column to text instead of failing the load.
    /// Default: None
    pub infer_schema_length: Option<usize>,

    /// Whether to draw the genre bar chart.
    /// Default: true
    pub render_chart: bool,

    /// File name of the genre bar chart inside `output_dir`.
    /// Default: "top_genres_movies_2015plus.png"
    pub chart_file: String,

    /// File name of the filtered CSV inside `output_dir`.
    /// Default: "netflix_movies_2015plus_clean.csv"
    pub clean_file: String,

    /// File name of the text summary inside `output_dir`.
    /// Default: "day1_summary.txt"
    pub summary_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target_category: "movie".to_string(),
            min_release_year: 2015,
            top_n: 10,
            infer_schema_length: None,
            render_chart: true,
            chart_file: "top_genres_movies_2015plus.png".to_string(),
            clean_file: "netflix_movies_2015plus_clean.csv".to_string(),
            summary_file: "day1_summary.txt".to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Full path of the genre chart.
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.top_n == 0 {
            return Err(ConfigValidationError::InvalidTopN(self.top_n));
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidInferSchemaLength);
        }

        if self.target_category.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField(
                "target_category".to_string(),
            ));
        }

        for (field, value) in [
            ("chart_file", &self.chart_file),
            ("clean_file", &self.clean_file),
            ("summary_file", &self.summary_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyField(field.to_string()));
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid top_n: {0} (must be at least 1)")]
    InvalidTopN(usize),

    #[error("Invalid infer_schema_length: must be at least 1 when set")]
    InvalidInferSchemaLength,

    #[error("'{0}' must not be empty")]
    EmptyField(String),
}

/// Builder for [`ReportConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    target_category: Option<String>,
    min_release_year: Option<i64>,
    top_n: Option<usize>,
    infer_schema_length: Option<Option<usize>>,
    render_chart: Option<bool>,
    chart_file: Option<String>,
    clean_file: Option<String>,
    summary_file: Option<String>,
}

impl ReportConfigBuilder {
    /// Set the path of the input CSV.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the directory that receives every output artifact.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the `type` value to keep (case-insensitive).
    pub fn target_category(mut self, category: impl Into<String>) -> Self {
        self.target_category = Some(category.into());
        self
    }

    /// Set the inclusive lower bound on `release_year`.
    pub fn min_release_year(mut self, year: i64) -> Self {
        self.min_release_year = Some(year);
        self
    }

    /// Set how many genres the rank list keeps.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Set how many rows are scanned for type inference (`None` = all).
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Enable or disable chart rendering.
    pub fn render_chart(mut self, render: bool) -> Self {
        self.render_chart = Some(render);
        self
    }

    /// Override the chart file name.
    pub fn chart_file(mut self, name: impl Into<String>) -> Self {
        self.chart_file = Some(name.into());
        self
    }

    /// Override the clean CSV file name.
    pub fn clean_file(mut self, name: impl Into<String>) -> Self {
        self.clean_file = Some(name.into());
        self
    }

    /// Override the summary file name.
    pub fn summary_file(mut self, name: impl Into<String>) -> Self {
        self.summary_file = Some(name.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ReportConfig` or an error if validation fails.
    pub fn build(self) -> Result<ReportConfig, ConfigValidationError> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            target_category: self.target_category.unwrap_or(defaults.target_category),
            min_release_year: self.min_release_year.unwrap_or(defaults.min_release_year),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            render_chart: self.render_chart.unwrap_or(defaults.render_chart),
            chart_file: self.chart_file.unwrap_or(defaults.chart_file),
            clean_file: self.clean_file.unwrap_or(defaults.clean_file),
            summary_file: self.summary_file.unwrap_or(defaults.summary_file),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data/netflix_titles.csv"));
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.target_category, "movie");
        assert_eq!(config.min_release_year, 2015);
        assert_eq!(config.top_n, 10);
        assert!(config.render_chart);
    }

    #[test]
    fn test_chart_path() {
        let config = ReportConfig::default();
        assert_eq!(
            config.chart_path(),
            PathBuf::from("outputs/top_genres_movies_2015plus.png")
        );
    }

    #[test]
    fn test_builder_defaults() {
        let config = ReportConfig::builder().build().unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.infer_schema_length, None);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ReportConfig::builder()
            .input_path("in/titles.csv")
            .output_dir("out")
            .target_category("TV Show")
            .min_release_year(2020)
            .top_n(3)
            .infer_schema_length(Some(500))
            .render_chart(false)
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in/titles.csv"));
        assert_eq!(config.chart_path(), PathBuf::from("out/top_genres_movies_2015plus.png"));
        assert_eq!(config.target_category, "TV Show");
        assert_eq!(config.min_release_year, 2020);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.infer_schema_length, Some(500));
        assert!(!config.render_chart);
    }

    #[test]
    fn test_validation_invalid_top_n() {
        let result = ReportConfig::builder().top_n(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidTopN(0)
        ));
    }

    #[test]
    fn test_validation_empty_file_name() {
        let result = ReportConfig::builder().summary_file("  ").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyField(field) if field == "summary_file"
        ));
    }

    #[test]
    fn test_validation_zero_schema_length() {
        let result = ReportConfig::builder().infer_schema_length(Some(0)).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidInferSchemaLength
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "input_path": "data/other.csv",
            "output_dir": "reports",
            "target_category": "movie",
            "min_release_year": 2019,
            "top_n": 5,
            "infer_schema_length": null,
            "render_chart": false,
            "chart_file": "genres.png",
            "clean_file": "clean.csv",
            "summary_file": "summary.txt"
        }"#;

        let config: ReportConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.min_release_year, 2019);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.infer_schema_length, None);
        assert_eq!(config.chart_path(), PathBuf::from("reports/genres.png"));
        assert!(config.validate().is_ok());
    }
}
