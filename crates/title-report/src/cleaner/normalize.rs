//! Column label normalization.

use crate::error::Result;
use once_cell::sync::Lazy;
use polars::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

static INVALID_LABEL_CHARS: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"[^a-z0-9_]").expect("label pattern is valid"));

/// Rewrite a column label to lowercase underscore form.
///
/// Surrounding whitespace is stripped, the label is lowercased, spaces become
/// underscores and anything outside `[a-z0-9_]` is removed.
///
/// ```rust,ignore
/// assert_eq!(normalize_label(" Date Added "), "date_added");
/// assert_eq!(normalize_label("Listed-In (Genres)"), "listedin_genres");
/// ```
pub fn normalize_label(label: &str) -> String {
    let lowered = label.trim().to_lowercase().replace(' ', "_");
    INVALID_LABEL_CHARS.replace_all(&lowered, "").into_owned()
}

/// Apply [`normalize_label`] to every column of the frame.
///
/// When two columns normalize to the same label, the later one wins and the
/// earlier one is dropped.
pub fn normalize_column_names(df: DataFrame) -> Result<DataFrame> {
    let normalized: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| normalize_label(name))
        .collect();

    let mut last_index: HashMap<&str, usize> = HashMap::with_capacity(normalized.len());
    for (idx, label) in normalized.iter().enumerate() {
        last_index.insert(label.as_str(), idx);
    }

    let mut columns = Vec::with_capacity(last_index.len());
    for (idx, (column, label)) in df.get_columns().iter().zip(&normalized).enumerate() {
        if last_index.get(label.as_str()) != Some(&idx) {
            warn!(
                "Column '{}' normalizes to '{}', which a later column also uses; dropping it",
                column.name(),
                label
            );
            continue;
        }
        if column.name().as_str() != label {
            debug!("Renamed column '{}' -> '{}'", column.name(), label);
        }
        let renamed = column
            .as_materialized_series()
            .clone()
            .with_name(label.as_str().into());
        columns.push(Column::from(renamed));
    }

    Ok(DataFrame::new(columns)?)
}
