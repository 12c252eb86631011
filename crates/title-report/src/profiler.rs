//! Dataset statistics: missing-value summary and the KPI record.

use crate::cleaner::numeric_values;
use crate::error::Result;
use crate::filter::YEAR_COLUMN;
use crate::types::{Kpis, MissingCount};
use crate::utils::find_column;
use polars::prelude::*;

/// Column whose distinct values are counted as "unique countries".
pub const COUNTRY_COLUMN: &str = "country";

/// Null count of every column, largest first.
///
/// Columns with equal counts keep their frame order.
pub fn missing_value_counts(df: &DataFrame) -> Vec<MissingCount> {
    let mut counts: Vec<MissingCount> = df
        .get_columns()
        .iter()
        .map(|column| MissingCount {
            column: column.name().to_string(),
            null_count: column.null_count(),
        })
        .collect();
    counts.sort_by(|a, b| b.null_count.cmp(&a.null_count));
    counts
}

/// Number of distinct non-missing values in a column.
pub fn distinct_non_null(column: &Column) -> Result<usize> {
    let values = column.as_materialized_series().drop_nulls();
    if values.is_empty() {
        return Ok(0);
    }
    Ok(values.n_unique()?)
}

/// Smallest and largest coerced release year, if any year is present.
pub fn year_range(df: &DataFrame) -> Result<(Option<i64>, Option<i64>)> {
    let Some(column) = find_column(df, YEAR_COLUMN) else {
        return Ok((None, None));
    };

    let years: Vec<f64> = numeric_values(column)?.into_iter().flatten().collect();
    let min = years.iter().copied().reduce(f64::min);
    let max = years.iter().copied().reduce(f64::max);

    Ok((min.map(|y| y as i64), max.map(|y| y as i64)))
}

/// Compute the KPI record.
///
/// `cleaned` is the table after duplicate removal, `filtered` the reporting
/// subset; country and year statistics are taken from `filtered`.
pub fn compute_kpis(cleaned: &DataFrame, filtered: &DataFrame) -> Result<Kpis> {
    let unique_countries = find_column(filtered, COUNTRY_COLUMN)
        .map(distinct_non_null)
        .transpose()?;
    let (year_min, year_max) = year_range(filtered)?;

    Ok(Kpis {
        total_rows_original: cleaned.height(),
        total_rows_filtered: filtered.height(),
        unique_countries,
        year_min,
        year_max,
    })
}
