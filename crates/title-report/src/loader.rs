//! Locating and reading the input dataset.

use crate::error::{ReportError, Result, ResultExt};
use polars::io::csv::read::{CsvReadOptions, NullValues};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Check that the dataset exists at `path`.
///
/// Fails with [`ReportError::MissingInput`] naming the expected location.
pub fn resolve_input(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(ReportError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    debug!("Resolved input: {}", path.display());
    Ok(path.to_path_buf())
}

/// Field values read as missing in addition to empty fields.
pub const NULL_SENTINELS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw text field stands for a missing value.
pub fn is_missing_marker(value: &str) -> bool {
    value.is_empty() || NULL_SENTINELS.contains(&value)
}

/// Read a comma-separated file with a header row, inferring column types.
///
/// `infer_schema_length` bounds how many rows are scanned for inference;
/// `None` scans the whole file. Empty fields, quoted or not, and the
/// [`NULL_SENTINELS`] load as nulls.
pub fn load_csv(path: &Path, infer_schema_length: Option<usize>) -> Result<DataFrame> {
    info!("Loading dataset from: {}", path.display());

    let null_values = NullValues::AllColumns(
        NULL_SENTINELS
            .iter()
            .map(|sentinel| PlSmallStr::from(*sentinel))
            .collect(),
    );

    let df = CsvReadOptions::default()
        .with_infer_schema_length(infer_schema_length)
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_missing_is_null(true)
                .with_null_values(Some(null_values)),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .context(format!("Opening {}", path.display()))?
        .finish()
        .context(format!("Parsing {}", path.display()))?;

    let df = null_missing_markers(df)?;
    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

/// Replace quoted empty fields and quoted sentinels left as text with nulls.
fn null_missing_markers(mut df: DataFrame) -> Result<DataFrame> {
    let text_columns: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().clone())
        .collect();

    for name in text_columns {
        let (cleaned, nulled) = {
            let values = df.column(name.as_str())?.as_materialized_series().str()?;
            let mut nulled = 0usize;
            let kept: Vec<Option<&str>> = values
                .into_iter()
                .map(|value| match value {
                    Some(text) if is_missing_marker(text) => {
                        nulled += 1;
                        None
                    }
                    other => other,
                })
                .collect();
            (Series::new(name.clone(), kept), nulled)
        };

        if nulled > 0 {
            debug!("Read {} quoted missing values in '{}' as null", nulled, name);
            df.replace(name.as_str(), cleaned)?;
        }
    }

    Ok(df)
}
