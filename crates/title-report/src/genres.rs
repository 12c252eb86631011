//! Genre frequency analysis over a comma-delimited listing column.
//!
//! The listing is split into one boolean indicator column per distinct token
//! (dummy encoding); each column is then summed and the sums ranked.
//!
//! Tokens are matched literally: `"Comedy"` and `"comedy "` are different
//! genres.

use crate::error::Result;
use crate::types::GenreCount;
use crate::utils::{column_as_strings, find_column};
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Column holding the comma-delimited genre listing.
pub const GENRE_COLUMN: &str = "listed_in";

/// Separator between genres inside one listing.
pub const GENRE_SEPARATOR: &str = ", ";

/// Split one listing into its distinct, non-empty tokens.
pub fn split_genres(listing: &str) -> BTreeSet<&str> {
    listing
        .split(GENRE_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect()
}

/// One boolean column per distinct genre, one row per input row.
///
/// Columns are ordered by genre name.
#[derive(Debug, Clone)]
pub struct GenreIndicators {
    frame: DataFrame,
}

impl GenreIndicators {
    /// Build the indicator table from a listing column. Missing listings
    /// produce a row of `false`.
    pub fn from_column(column: &Column) -> Result<Self> {
        let listings = column_as_strings(column)?;
        let per_row: Vec<BTreeSet<&str>> = listings
            .iter()
            .map(|listing| listing.as_deref().map(split_genres).unwrap_or_default())
            .collect();

        let mut membership: BTreeMap<&str, Vec<bool>> = BTreeMap::new();
        for (row, genres) in per_row.iter().enumerate() {
            for genre in genres {
                membership
                    .entry(*genre)
                    .or_insert_with(|| vec![false; per_row.len()])[row] = true;
            }
        }

        let columns: Vec<Column> = membership
            .into_iter()
            .map(|(genre, flags)| Column::from(Series::new(genre.into(), flags)))
            .collect();

        debug!(
            "Built {} genre indicator columns over {} rows",
            columns.len(),
            per_row.len()
        );

        Ok(Self {
            frame: DataFrame::new(columns)?,
        })
    }

    /// The indicator table itself.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of distinct genres.
    pub fn genre_count(&self) -> usize {
        self.frame.width()
    }

    /// Column sums: how many rows list each genre, in column order.
    pub fn counts(&self) -> Result<Vec<GenreCount>> {
        self.frame
            .get_columns()
            .iter()
            .map(|column| {
                let hits = column
                    .as_materialized_series()
                    .bool()?
                    .into_iter()
                    .filter(|flag| *flag == Some(true))
                    .count();
                Ok(GenreCount::new(column.name().as_str(), hits))
            })
            .collect()
    }

    /// Counts sorted descending, truncated to `top_n`.
    ///
    /// The sort is stable, so genres with equal counts stay in name order.
    pub fn top(&self, top_n: usize) -> Result<Vec<GenreCount>> {
        let mut counts = self.counts()?;
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(top_n);
        Ok(counts)
    }
}

/// Rank genres of the filtered titles.
///
/// Returns `None` when the frame has no genre column, so callers can omit
/// every genre-dependent output.
pub fn top_genres(df: &DataFrame, top_n: usize) -> Result<Option<Vec<GenreCount>>> {
    let Some(column) = find_column(df, GENRE_COLUMN) else {
        debug!("No '{}' column; genre analysis skipped", GENRE_COLUMN);
        return Ok(None);
    };

    let indicators = GenreIndicators::from_column(column)?;
    Ok(Some(indicators.top(top_n)?))
}
