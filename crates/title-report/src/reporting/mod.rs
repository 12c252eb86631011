//! Report generation module.
//!
//! This module turns the results of a run into its outputs:
//! - console diagnostics ([`console`])
//! - the genre bar chart ([`chart`])
//! - the filtered CSV and the text summary ([`ReportGenerator`])
//!
//! # Example
//!
//! ```rust,ignore
//! use title_report::reporting::{ReportGenerator, SummaryParams};
//!
//! let generator = ReportGenerator::new("outputs");
//! generator.write_clean_csv(&filtered, "clean.csv")?;
//! generator.write_summary(
//!     &SummaryParams { kpis: &kpis, top_genres: None, min_release_year: 2015, top_n: 10 },
//!     "summary.txt",
//! )?;
//! ```

pub mod chart;
pub mod console;
mod generator;

pub use chart::{bar_layout, render_genre_chart};
pub use generator::{ReportGenerator, SummaryParams, render_summary};
