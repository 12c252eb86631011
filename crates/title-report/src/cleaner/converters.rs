//! Total conversion functions from text to typed values.
//!
//! None of these fail on bad data: a value that does not convert comes back
//! as `None` and the row is kept.

use crate::utils::{column_as_strings, is_datetime_dtype, is_numeric_dtype};
use chrono::NaiveDate;
use polars::prelude::*;

/// Date layouts accepted for `date_added`, tried in order.
pub const DATE_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%Y/%m/%d",
];

/// Parse a number, returning `None` for anything that is not one.
///
/// Surrounding whitespace is ignored. `NaN` and infinities count as missing.
pub fn coerce_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a calendar date in one of [`DATE_FORMATS`], returning `None` otherwise.
pub fn coerce_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
fn days_since_epoch(date: NaiveDate) -> Option<i32> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    i32::try_from(date.signed_duration_since(epoch).num_days()).ok()
}

/// Read a column as numbers, one `Option<f64>` per row.
///
/// Numeric columns are cast; anything else is rendered as text and run
/// through [`coerce_number`].
pub fn numeric_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let series = column.as_materialized_series();
    if is_numeric_dtype(series.dtype()) {
        let floats = series.cast(&DataType::Float64)?;
        return Ok(floats
            .f64()?
            .into_iter()
            .map(|value| value.filter(|v| v.is_finite()))
            .collect());
    }

    Ok(column_as_strings(column)?
        .into_iter()
        .map(|value| value.as_deref().and_then(coerce_number))
        .collect())
}

/// Convert a text column to a polars `Date` series.
///
/// Returns the converted series and the number of non-missing values that
/// failed to parse. Columns that already hold dates are returned unchanged.
pub fn string_to_date(column: &Column) -> PolarsResult<(Series, usize)> {
    let series = column.as_materialized_series();
    if series.dtype() == &DataType::Date {
        return Ok((series.clone(), 0));
    }
    if is_datetime_dtype(series.dtype()) {
        return Ok((series.cast(&DataType::Date)?, 0));
    }

    let mut unparseable = 0;
    let days: Vec<Option<i32>> = column_as_strings(column)?
        .into_iter()
        .map(|value| {
            let value = value?;
            let parsed = coerce_date(&value).and_then(days_since_epoch);
            if parsed.is_none() && !value.trim().is_empty() {
                unparseable += 1;
            }
            parsed
        })
        .collect();

    let dates = Series::new(series.name().clone(), days).cast(&DataType::Date)?;
    Ok((dates, unparseable))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("2016"), Some(2016.0));
        assert_eq!(coerce_number(" 2019 "), Some(2019.0));
        assert_eq!(coerce_number("2015.0"), Some(2015.0));
        assert_eq!(coerce_number("-3"), Some(-3.0));
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("unknown"), None);
        assert_eq!(coerce_number("20l6"), None);
        assert_eq!(coerce_number("NaN"), None);
    }

    #[test]
    fn test_coerce_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 9, 25);
        assert_eq!(coerce_date("September 25, 2021"), expected);
        assert_eq!(coerce_date(" September 25, 2021"), expected);
        assert_eq!(coerce_date("Sep 25, 2021"), expected);
        assert_eq!(coerce_date("2021-09-25"), expected);
        assert_eq!(coerce_date("09/25/2021"), expected);
        assert_eq!(coerce_date("25 September 2021"), expected);
    }

    #[test]
    fn test_coerce_date_rejects_garbage() {
        assert_eq!(coerce_date(""), None);
        assert_eq!(coerce_date("not a date"), None);
        assert_eq!(coerce_date("February 30, 2021"), None);
    }

    #[test]
    fn test_numeric_values_from_strings() {
        let column = Column::from(Series::new(
            "release_year".into(),
            &[Some("2016"), Some("abc"), None, Some(" 2020 ")],
        ));
        let values = numeric_values(&column).unwrap();
        assert_eq!(values, vec![Some(2016.0), None, None, Some(2020.0)]);
    }

    #[test]
    fn test_numeric_values_from_integers() {
        let column = Column::from(Series::new(
            "release_year".into(),
            &[Some(2014i64), None, Some(2021)],
        ));
        let values = numeric_values(&column).unwrap();
        assert_eq!(values, vec![Some(2014.0), None, Some(2021.0)]);
    }

    #[test]
    fn test_string_to_date() {
        let column = Column::from(Series::new(
            "date_added".into(),
            &[Some("September 25, 2021"), Some("someday"), None],
        ));

        let (dates, unparseable) = string_to_date(&column).unwrap();
        assert_eq!(dates.dtype(), &DataType::Date);
        assert_eq!(dates.null_count(), 2);
        assert_eq!(unparseable, 1);
        assert_eq!(dates.name().as_str(), "date_added");
    }

    #[test]
    fn test_string_to_date_keeps_existing_dates() {
        let column = Column::from(
            Series::new("date_added".into(), &[Some(18_000i32), None])
                .cast(&DataType::Date)
                .unwrap(),
        );
        let (dates, unparseable) = string_to_date(&column).unwrap();
        assert_eq!(dates.dtype(), &DataType::Date);
        assert_eq!(unparseable, 0);
        assert_eq!(dates.null_count(), 1);
    }
}
