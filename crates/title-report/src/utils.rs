//! Shared utilities for the report pipeline.
//!
//! Optional-column lookup lives here: every stage that depends on a named
//! column asks [`find_column`] first and skips itself when the answer is
//! `None`.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a date or datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Datetime(_, _) | DataType::Date)
}

// =============================================================================
// Column Lookup Utilities
// =============================================================================

/// Look up a column by name, returning `None` instead of an error when absent.
pub fn find_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a Column> {
    df.column(name).ok()
}

/// View any column as text, one `Option<String>` per row.
///
/// String columns are read as-is; other dtypes are cast to `String` first,
/// which renders numbers the way polars prints them.
pub fn column_as_strings(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let series = column.as_materialized_series();
    let as_text = if series.dtype() == &DataType::String {
        series.clone()
    } else {
        series.cast(&DataType::String)?
    };

    Ok(as_text
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df! {
            "title" => &["A", "B"],
            "release_year" => &[2016i64, 2020],
        }
        .unwrap()
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_is_datetime_dtype() {
        assert!(is_datetime_dtype(&DataType::Date));
        assert!(is_datetime_dtype(&DataType::Datetime(
            TimeUnit::Milliseconds,
            None
        )));
        assert!(!is_datetime_dtype(&DataType::String));
    }

    #[test]
    fn test_find_column() {
        let df = sample_df();
        assert!(find_column(&df, "title").is_some());
        assert!(find_column(&df, "country").is_none());
        assert!(find_column(&df, "Release Year").is_none());
    }

    #[test]
    fn test_column_as_strings_casts_numbers() {
        let df = sample_df();
        let years = column_as_strings(df.column("release_year").unwrap()).unwrap();
        assert_eq!(
            years,
            vec![Some("2016".to_string()), Some("2020".to_string())]
        );
    }

    #[test]
    fn test_column_as_strings_keeps_nulls() {
        let series = Series::new("country".into(), &[Some("India"), None]);
        let column = Column::from(series);
        let values = column_as_strings(&column).unwrap();
        assert_eq!(values, vec![Some("India".to_string()), None]);
    }
}
