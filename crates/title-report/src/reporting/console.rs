//! Console diagnostics.
//!
//! These are printed with `println!` rather than logged: they are the
//! primary output of the tool and should show regardless of the log level.

use crate::types::{GenreCount, Kpis, MissingCount};
use polars::prelude::*;
use std::path::Path;

/// Number of leading rows shown for the raw table.
pub const HEAD_ROWS: usize = 3;

/// Number of columns shown in the missing-value listing.
pub const MISSING_ROWS: usize = 10;

pub fn print_head(df: &DataFrame) {
    println!("\n=== HEAD ===");
    println!("{}", df.head(Some(HEAD_ROWS)));
}

pub fn print_shape(df: &DataFrame) {
    println!("\n=== SHAPE === {:?}", df.shape());
}

pub fn print_missing_values(missing: &[MissingCount]) {
    println!("\n=== MISSING VALUES (top {}) ===", MISSING_ROWS);
    let shown = &missing[..missing.len().min(MISSING_ROWS)];
    let width = shown.iter().map(|m| m.column.len()).max().unwrap_or(0);
    for entry in shown {
        println!("{:<width$}    {}", entry.column, entry.null_count, width = width);
    }
}

pub fn print_filtered_shape(df: &DataFrame, min_release_year: i64) {
    println!(
        "\n=== FILTERED SHAPE (Movies >= {}) === {:?}",
        min_release_year,
        df.shape()
    );
}

pub fn print_top_genres(genres: &[GenreCount], top_n: usize, min_release_year: i64) {
    println!(
        "\n=== TOP {} GENRES (Movies >= {}) ===",
        top_n, min_release_year
    );
    let width = genres.iter().map(|g| g.genre.len()).max().unwrap_or(0);
    for genre in genres {
        println!("{:<width$}    {}", genre.genre, genre.count, width = width);
    }
}

pub fn print_kpis(kpis: &Kpis) {
    println!("\n=== KPIs ===");
    for (name, value) in kpis.entries() {
        println!("{}: {}", name, value);
    }
}

/// Announce a written artifact.
pub fn print_saved(what: &str, path: &Path) {
    println!("[+] Saved {} → {}", what, path.display());
}
