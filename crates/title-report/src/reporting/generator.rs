use crate::error::{Result, ResultExt};
use crate::types::{GenreCount, Kpis, display_optional};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::{debug, info};

/// Parameters for rendering the plain-text summary.
pub struct SummaryParams<'a> {
    pub kpis: &'a Kpis,
    pub top_genres: Option<&'a [GenreCount]>,
    pub min_release_year: i64,
    pub top_n: usize,
}

/// Writes the durable artifacts of a run into one output directory.
///
/// Every write overwrites an existing file of the same name.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).context(format!(
            "Creating output directory {}",
            self.output_dir.display()
        ))?;
        debug!("Output directory ready: {}", self.output_dir.display());
        Ok(())
    }

    /// Write a frame as CSV with a header row and no index column.
    pub fn write_clean_csv(&self, df: &DataFrame, file_name: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let output_path = self.output_dir.join(file_name);
        let mut file = File::create(&output_path)
            .context(format!("Creating {}", output_path.display()))?;

        let mut df = df.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(&mut df)
            .context(format!("Writing {}", output_path.display()))?;

        info!("Dataset saved: {}", output_path.display());
        Ok(output_path)
    }

    /// Render the summary and write it to `file_name`.
    pub fn write_summary(&self, params: &SummaryParams<'_>, file_name: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let output_path = self.output_dir.join(file_name);
        fs::write(&output_path, render_summary(params))
            .context(format!("Writing {}", output_path.display()))?;

        info!("Summary saved: {}", output_path.display());
        Ok(output_path)
    }
}

/// Compose the human-readable summary text.
///
/// Lines are joined with `\n` and the text has no trailing newline. Missing
/// KPI values render as `None`; the genre block is present only when genres
/// were computed.
pub fn render_summary(params: &SummaryParams<'_>) -> String {
    let kpis = params.kpis;
    let mut lines = vec![
        format!(
            "# Netflix Movies (≥{}) — Day 1 Summary",
            params.min_release_year
        ),
        format!("- Original rows: {}", kpis.total_rows_original),
        format!("- Filtered rows: {}", kpis.total_rows_filtered),
        format!(
            "- Year range: {}–{}",
            display_optional(kpis.year_min),
            display_optional(kpis.year_max)
        ),
        format!(
            "- Unique countries: {}",
            display_optional(kpis.unique_countries)
        ),
    ];

    if let Some(genres) = params.top_genres {
        let listing: Vec<String> = genres
            .iter()
            .map(|g| format!("- {}: {}", g.genre, g.count))
            .collect();
        lines.push(format!(
            "\nTop {} Genres:\n{}",
            params.top_n,
            listing.join("\n")
        ));
    }

    lines.retain(|line| !line.is_empty());
    lines.join("\n")
}
