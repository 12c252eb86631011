//! Media Titles Report Pipeline
//!
//! Loads a catalogue of media titles (the Netflix titles CSV), cleans it,
//! narrows it to recent movies, ranks their genres and writes a small report.
//!
//! # Overview
//!
//! A run is a straight line of stages:
//!
//! - **Input resolution**: fail early if the dataset is missing
//! - **Loading**: CSV into a polars `DataFrame`, types inferred
//! - **Column normalization**: lowercase, underscore-separated labels
//! - **Cleaning**: duplicate removal, tolerant date parsing
//! - **Filtering**: category, minimum release year, title present
//! - **Genre analysis**: indicator columns per genre, summed and ranked
//! - **Reporting**: console diagnostics, bar chart, clean CSV, text summary
//!
//! Stages that depend on an optional column skip themselves, and the outputs
//! derived from them, when that column is absent.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use title_report::{Pipeline, ReportConfig};
//!
//! // Defaults: data/netflix_titles.csv -> outputs/
//! let result = Pipeline::new(ReportConfig::default()).run()?;
//!
//! for genre in result.top_genres.unwrap_or_default() {
//!     println!("{}: {}", genre.genre, genre.count);
//! }
//! ```
//!
//! # In-memory use
//!
//! ```rust,ignore
//! use title_report::{Pipeline, ReportConfig};
//! use polars::prelude::*;
//!
//! let df = df! {
//!     "Type" => &["Movie"],
//!     "Release Year" => &[2016i64],
//!     "Title" => &["A"],
//!     "Listed In" => &["Comedies, Dramas"],
//! }?;
//!
//! let processed = Pipeline::new(ReportConfig::default()).process(df)?;
//! assert_eq!(processed.kpis.total_rows_filtered, 1);
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod filter;
pub mod genres;
pub mod loader;
pub mod pipeline;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{DataCleaner, coerce_date, coerce_number, normalize_label};
pub use config::{ConfigValidationError, ReportConfig, ReportConfigBuilder};
pub use error::{ReportError, Result as ReportResult, ResultExt};
pub use filter::TitleFilter;
pub use genres::{GenreIndicators, top_genres};
pub use pipeline::{Pipeline, PipelineStage, ProcessedDataset};
pub use reporting::ReportGenerator;
pub use types::{GenreCount, Kpis, MissingCount, PipelineResult, WrittenArtifacts};
