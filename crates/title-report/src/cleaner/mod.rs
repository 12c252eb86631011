//! Data cleaning for the titles dataset.
//!
//! This module provides functionality for:
//! - Normalizing column labels
//! - Removing exact duplicate rows
//! - Parsing the `date_added` column into a typed date

mod converters;
mod normalize;

pub use converters::{DATE_FORMATS, coerce_date, coerce_number, numeric_values, string_to_date};
pub use normalize::{normalize_column_names, normalize_label};

use crate::error::Result;
use crate::utils::find_column;
use polars::prelude::*;
use tracing::{debug, info};

/// Name of the column holding the date a title was added to the catalogue.
pub const DATE_ADDED_COLUMN: &str = "date_added";

/// Data cleaner for the titles dataset.
pub struct DataCleaner;

impl DataCleaner {
    /// Remove duplicates and parse dates.
    ///
    /// Expects labels to be normalized already. Returns the cleaned frame and
    /// a human-readable list of what was done.
    pub fn clean(&self, df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
        let mut cleaning_actions = Vec::new();

        info!("Performing data cleaning...");

        let (df, removed) = Self::remove_duplicates(df)?;
        if removed > 0 {
            cleaning_actions.push(format!("Removed {} duplicate rows", removed));
        } else {
            cleaning_actions.push("No duplicate rows found".to_string());
        }

        let (df, unparseable) = Self::parse_date_added(df)?;
        match unparseable {
            Some(0) => cleaning_actions.push(format!("Parsed {} as dates", DATE_ADDED_COLUMN)),
            Some(n) => cleaning_actions.push(format!(
                "Parsed {} as dates ({} unparseable values set to null)",
                DATE_ADDED_COLUMN, n
            )),
            None => debug!("No '{}' column; skipping date parsing", DATE_ADDED_COLUMN),
        }

        Ok((df, cleaning_actions))
    }

    /// Drop rows that repeat an earlier row across every column.
    ///
    /// Surviving rows keep their first-occurrence order. Returns the frame
    /// and the number of rows removed.
    pub fn remove_duplicates(df: DataFrame) -> Result<(DataFrame, usize)> {
        let before = df.height();
        if df.width() == 0 {
            return Ok((df, 0));
        }

        let deduplicated = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        let removed = before - deduplicated.height();
        debug!("Removed {} duplicate rows", removed);

        Ok((deduplicated, removed))
    }

    /// Convert `date_added` to a polars `Date`, nulling values that fail to parse.
    ///
    /// Returns `None` as the count when the column is absent.
    pub fn parse_date_added(mut df: DataFrame) -> Result<(DataFrame, Option<usize>)> {
        let Some(column) = find_column(&df, DATE_ADDED_COLUMN) else {
            return Ok((df, None));
        };

        let (dates, unparseable) = string_to_date(column)?;
        df.replace(DATE_ADDED_COLUMN, dates)?;
        debug!(
            "Converted '{}' to dates, {} unparseable",
            DATE_ADDED_COLUMN, unparseable
        );

        Ok((df, Some(unparseable)))
    }
}
