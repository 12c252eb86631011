//! Plain data types produced by the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Occurrence count of one genre among the filtered titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

impl GenreCount {
    pub fn new(genre: impl Into<String>, count: usize) -> Self {
        Self {
            genre: genre.into(),
            count,
        }
    }
}

/// Null count of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub null_count: usize,
}

/// Scalar summary statistics computed once per run.
///
/// Every field backed by an optional column is `None` when that column is
/// absent (or, for the year range, entirely missing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Rows after duplicate removal, before filtering.
    pub total_rows_original: usize,
    pub total_rows_filtered: usize,
    pub unique_countries: Option<usize>,
    pub year_min: Option<i64>,
    pub year_max: Option<i64>,
}

impl Kpis {
    /// `(name, rendered value)` pairs in display order, `None` rendered as "None".
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_rows_original", self.total_rows_original.to_string()),
            ("total_rows_filtered", self.total_rows_filtered.to_string()),
            ("unique_countries", display_optional(self.unique_countries)),
            ("year_min", display_optional(self.year_min)),
            ("year_max", display_optional(self.year_max)),
        ]
    }
}

/// Render an optional value, writing `None` for a missing one.
pub fn display_optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Artifacts written during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenArtifacts {
    pub chart: Option<PathBuf>,
    pub clean_data: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub input_file: PathBuf,
    /// (rows, columns) as loaded.
    pub raw_shape: (usize, usize),
    /// (rows, columns) after filtering.
    pub filtered_shape: (usize, usize),
    pub cleaning_actions: Vec<String>,
    pub missing_values: Vec<MissingCount>,
    /// `None` when the genre column was absent.
    pub top_genres: Option<Vec<GenreCount>>,
    pub kpis: Kpis,
    pub artifacts: WrittenArtifacts,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_optional() {
        assert_eq!(display_optional(Some(2015)), "2015");
        assert_eq!(display_optional::<i64>(None), "None");
    }

    #[test]
    fn test_kpi_entries_order_and_none() {
        let kpis = Kpis {
            total_rows_original: 3,
            total_rows_filtered: 1,
            unique_countries: None,
            year_min: Some(2016),
            year_max: Some(2016),
        };

        let entries = kpis.entries();
        let names: Vec<_> = entries.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "total_rows_original",
                "total_rows_filtered",
                "unique_countries",
                "year_min",
                "year_max"
            ]
        );
        assert_eq!(entries[2].1, "None");
        assert_eq!(entries[3].1, "2016");
    }

    #[test]
    fn test_kpis_serialize_nulls() {
        let kpis = Kpis {
            total_rows_original: 0,
            total_rows_filtered: 0,
            unique_countries: None,
            year_min: None,
            year_max: None,
        };
        let json = serde_json::to_value(&kpis).unwrap();
        assert!(json["year_min"].is_null());
        assert_eq!(json["total_rows_original"], 0);
    }
}
