//! Row filtering: target category, minimum release year, title present.
//!
//! Each predicate depends on one column. When that column is missing the
//! predicate is skipped rather than failing the run, so any combination of
//! present/absent columns yields a well-defined result.

use crate::cleaner::numeric_values;
use crate::error::Result;
use crate::utils::{column_as_strings, find_column};
use polars::prelude::*;
use tracing::debug;

/// Column compared against the target category.
pub const CATEGORY_COLUMN: &str = "type";
/// Column compared against the minimum year.
pub const YEAR_COLUMN: &str = "release_year";
/// Column that must be present for a row to survive.
pub const TITLE_COLUMN: &str = "title";

/// Filters the cleaned titles down to the reporting subset.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    target_category: String,
    min_release_year: i64,
}

impl TitleFilter {
    pub fn new(target_category: impl Into<String>, min_release_year: i64) -> Self {
        Self {
            target_category: target_category.into(),
            min_release_year,
        }
    }

    /// Apply every applicable predicate in turn.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        let df = self.keep_category(df.clone())?;
        let df = self.keep_recent(df)?;
        let df = Self::drop_untitled(df)?;
        debug!("Filter kept {} rows", df.height());
        Ok(df)
    }

    /// Keep rows whose category equals the target, ignoring case.
    pub fn keep_category(&self, df: DataFrame) -> Result<DataFrame> {
        let Some(column) = find_column(&df, CATEGORY_COLUMN) else {
            debug!("No '{}' column; category filter skipped", CATEGORY_COLUMN);
            return Ok(df);
        };

        let target = self.target_category.to_lowercase();
        let mask: Vec<bool> = column_as_strings(column)?
            .iter()
            .map(|value| {
                value
                    .as_deref()
                    .is_some_and(|v| v.to_lowercase() == target)
            })
            .collect();

        apply_mask(&df, &mask)
    }

    /// Keep rows whose coerced release year is at least the threshold.
    ///
    /// Values that do not coerce to a number are treated as failing.
    pub fn keep_recent(&self, df: DataFrame) -> Result<DataFrame> {
        let Some(column) = find_column(&df, YEAR_COLUMN) else {
            debug!("No '{}' column; year filter skipped", YEAR_COLUMN);
            return Ok(df);
        };

        let threshold = self.min_release_year as f64;
        let mask: Vec<bool> = numeric_values(column)?
            .into_iter()
            .map(|year| year.is_some_and(|y| y >= threshold))
            .collect();

        apply_mask(&df, &mask)
    }

    /// Drop rows with no title.
    pub fn drop_untitled(df: DataFrame) -> Result<DataFrame> {
        let Some(column) = find_column(&df, TITLE_COLUMN) else {
            debug!("No '{}' column; title filter skipped", TITLE_COLUMN);
            return Ok(df);
        };

        let present = column.as_materialized_series().is_not_null();
        Ok(df.filter(&present)?)
    }
}

fn apply_mask(df: &DataFrame, mask: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice(PlSmallStr::from_static("mask"), mask);
    Ok(df.filter(&mask)?)
}
