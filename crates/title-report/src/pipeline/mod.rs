//! The report pipeline.
//!
//! [`Pipeline::process`] runs the in-memory part (normalize, clean, filter,
//! aggregate) on any `DataFrame`; [`Pipeline::run`] wraps it with input
//! resolution, loading and the reporting side effects.
//!
//! # Example
//!
//! ```rust,ignore
//! use title_report::{Pipeline, ReportConfig};
//!
//! let config = ReportConfig::builder()
//!     .input_path("data/netflix_titles.csv")
//!     .output_dir("outputs")
//!     .build()?;
//!
//! let result = Pipeline::new(config).run()?;
//! println!("{} movies kept", result.kpis.total_rows_filtered);
//! ```

mod stage;

pub use stage::PipelineStage;

use crate::cleaner::{DataCleaner, normalize_column_names};
use crate::config::ReportConfig;
use crate::error::{Result, ResultExt};
use crate::filter::TitleFilter;
use crate::genres::top_genres;
use crate::loader::{load_csv, resolve_input};
use crate::profiler::{compute_kpis, missing_value_counts};
use crate::reporting::{ReportGenerator, SummaryParams, console, render_genre_chart};
use crate::types::{GenreCount, Kpis, MissingCount, PipelineResult, WrittenArtifacts};
use polars::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything the in-memory stages produce.
#[derive(Debug, Clone)]
pub struct ProcessedDataset {
    /// Shape of the table as loaded.
    pub raw_shape: (usize, usize),
    /// Null counts of the normalized table, before duplicate removal.
    pub missing_values: Vec<MissingCount>,
    /// Normalized, deduplicated table with parsed dates.
    pub cleaned: DataFrame,
    /// Reporting subset of `cleaned`.
    pub filtered: DataFrame,
    pub cleaning_actions: Vec<String>,
    /// `None` when the genre column was absent.
    pub top_genres: Option<Vec<GenreCount>>,
    pub kpis: Kpis,
}

/// The title report pipeline.
pub struct Pipeline {
    config: ReportConfig,
    cleaner: DataCleaner,
    filter: TitleFilter,
    reporter: ReportGenerator,
}

impl Pipeline {
    /// Create a pipeline for a validated configuration.
    pub fn new(config: ReportConfig) -> Self {
        let filter = TitleFilter::new(&config.target_category, config.min_release_year);
        let reporter = ReportGenerator::new(&config.output_dir);
        Self {
            config,
            cleaner: DataCleaner,
            filter,
            reporter,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run the in-memory stages on an already loaded table.
    pub fn process(&self, raw: DataFrame) -> Result<ProcessedDataset> {
        let raw_shape = raw.shape();

        info!("{}", PipelineStage::NormalizingColumns.label());
        let normalized = normalize_column_names(raw).context("Normalizing column names")?;
        let missing_values = missing_value_counts(&normalized);

        info!("{}", PipelineStage::Cleaning.label());
        let (cleaned, cleaning_actions) = self.cleaner.clean(normalized)?;
        for action in &cleaning_actions {
            info!("  - {}", action);
        }

        info!("{}", PipelineStage::Filtering.label());
        let filtered = self.filter.apply(&cleaned).context("Filtering rows")?;
        info!(
            "Kept {} of {} rows (category '{}', release year >= {})",
            filtered.height(),
            cleaned.height(),
            self.config.target_category,
            self.config.min_release_year
        );

        info!("{}", PipelineStage::GenreAnalysis.label());
        let top_genres = top_genres(&filtered, self.config.top_n).context("Ranking genres")?;
        match &top_genres {
            Some(genres) => debug!("Ranked {} genres", genres.len()),
            None => info!("No genre column; genre outputs will be omitted"),
        }

        let kpis = compute_kpis(&cleaned, &filtered)?;

        Ok(ProcessedDataset {
            raw_shape,
            missing_values,
            cleaned,
            filtered,
            cleaning_actions,
            top_genres,
            kpis,
        })
    }

    /// Run the whole pipeline: resolve, load, process, print and write.
    ///
    /// Nothing is written unless every in-memory stage succeeded. The
    /// configuration is validated again here since its fields are public.
    pub fn run(&self) -> Result<PipelineResult> {
        let start = Instant::now();
        self.config.validate()?;

        info!("{}", PipelineStage::ResolvingInput.label());
        let input = resolve_input(&self.config.input_path)?;

        info!("{}", PipelineStage::Loading.label());
        let raw = load_csv(&input, self.config.infer_schema_length)?;
        console::print_head(&raw);
        console::print_shape(&raw);

        let processed = self.process(raw)?;

        info!("{}", PipelineStage::Reporting.label());
        let artifacts = self.report(&processed)?;

        Ok(PipelineResult {
            input_file: input,
            raw_shape: processed.raw_shape,
            filtered_shape: processed.filtered.shape(),
            cleaning_actions: processed.cleaning_actions,
            missing_values: processed.missing_values,
            top_genres: processed.top_genres,
            kpis: processed.kpis,
            artifacts,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Print diagnostics and write the chart, clean CSV and summary.
    pub fn report(&self, processed: &ProcessedDataset) -> Result<WrittenArtifacts> {
        let config = &self.config;
        let mut artifacts = WrittenArtifacts::default();

        console::print_missing_values(&processed.missing_values);
        console::print_filtered_shape(&processed.filtered, config.min_release_year);

        self.reporter.ensure_output_dir()?;

        if let Some(genres) = &processed.top_genres {
            console::print_top_genres(genres, config.top_n, config.min_release_year);
            artifacts.chart = self.write_chart(genres)?;
        }

        console::print_kpis(&processed.kpis);

        let clean_path = self
            .reporter
            .write_clean_csv(&processed.filtered, &config.clean_file)?;
        console::print_saved("cleaned data", &clean_path);
        artifacts.clean_data = Some(clean_path);

        let summary_path = self.reporter.write_summary(
            &SummaryParams {
                kpis: &processed.kpis,
                top_genres: processed.top_genres.as_deref(),
                min_release_year: config.min_release_year,
                top_n: config.top_n,
            },
            &config.summary_file,
        )?;
        console::print_saved("summary", &summary_path);
        artifacts.summary = Some(summary_path);

        Ok(artifacts)
    }

    fn write_chart(&self, genres: &[GenreCount]) -> Result<Option<std::path::PathBuf>> {
        if !self.config.render_chart {
            debug!("Chart rendering disabled");
            return Ok(None);
        }
        if genres.is_empty() {
            warn!("No genres among the filtered titles; chart skipped");
            return Ok(None);
        }

        let path = self.config.chart_path();
        let caption = format!("Top Genres (Movies ≥ {})", self.config.min_release_year);
        render_genre_chart(genres, &caption, &path).context("Rendering genre chart")?;
        console::print_saved("plot", &path);
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pipeline() -> Pipeline {
        Pipeline::new(ReportConfig::builder().render_chart(false).build().unwrap())
    }

    fn example_rows() -> DataFrame {
        df! {
            "Type" => &["Movie", "TV Show", "Movie"],
            "Release Year" => &[2016i64, 2020, 2010],
            "Title" => &["A", "B", "C"],
            "Listed In" => &["Comedies, Dramas", "Kids' TV", "Action"],
        }
        .unwrap()
    }

    #[test]
    fn test_process_example_rows() {
        let processed = pipeline().process(example_rows()).unwrap();

        assert_eq!(processed.raw_shape, (3, 4));
        assert_eq!(processed.filtered.height(), 1);
        assert_eq!(
            processed.top_genres,
            Some(vec![
                GenreCount::new("Comedies", 1),
                GenreCount::new("Dramas", 1)
            ])
        );
        assert_eq!(processed.kpis.total_rows_original, 3);
        assert_eq!(processed.kpis.total_rows_filtered, 1);
        assert_eq!(processed.kpis.year_min, Some(2016));
        assert_eq!(processed.kpis.unique_countries, None);
    }

    #[test]
    fn test_process_counts_rows_after_deduplication() {
        let raw = df! {
            "type" => &["Movie", "Movie", "Movie"],
            "release_year" => &[2018i64, 2018, 2019],
            "title" => &["A", "A", "B"],
        }
        .unwrap();

        let processed = pipeline().process(raw).unwrap();
        assert_eq!(processed.kpis.total_rows_original, 2);
        assert_eq!(processed.kpis.total_rows_filtered, 2);
        assert_eq!(processed.top_genres, None);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = ReportConfig {
            top_n: 0,
            ..ReportConfig::default()
        };
        let pipeline = Pipeline::new(config);
        assert_eq!(pipeline.config().top_n, 0);

        let err = pipeline.run().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_missing_values_reported_on_normalized_labels() {
        let raw = df! {
            "Title" => &[Some("A"), Some("A")],
            "Director" => &[None::<&str>, None],
        }
        .unwrap();

        let processed = pipeline().process(raw).unwrap();
        assert_eq!(
            processed.missing_values,
            vec![
                MissingCount { column: "director".to_string(), null_count: 2 },
                MissingCount { column: "title".to_string(), null_count: 0 },
            ]
        );
    }
}
