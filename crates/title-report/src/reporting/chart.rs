//! Horizontal bar chart of the genre rank list.

use crate::error::{ReportError, Result};
use crate::types::GenreCount;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;
use tracing::info;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 600;

/// Matplotlib's default bar colour.
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

fn chart_error(err: impl Display) -> ReportError {
    ReportError::ChartRenderFailed(err.to_string())
}

/// Bars from bottom to top: the rank list reversed, so the most frequent
/// genre ends up at the top of the chart.
pub fn bar_layout(genres: &[GenreCount]) -> Vec<(String, u32)> {
    genres
        .iter()
        .rev()
        .map(|g| (g.genre.clone(), u32::try_from(g.count).unwrap_or(u32::MAX)))
        .collect()
}

/// Draw the genre counts as a horizontal bar chart and save it as PNG.
///
/// Callers skip this for an empty rank list.
pub fn render_genre_chart(genres: &[GenreCount], caption: &str, path: &Path) -> Result<()> {
    let bars = bar_layout(genres);
    let max_count = bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let longest_label = bars
        .iter()
        .map(|(genre, _)| genre.chars().count())
        .max()
        .unwrap_or(0);
    let label_area = (longest_label as u32 * 8 + 20).min(CHART_WIDTH / 2);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(label_area)
        .build_cartesian_2d(
            0u32..max_count.saturating_add(1),
            (0u32..bars.len() as u32).into_segmented(),
        )
        .map_err(chart_error)?;

    let label_for = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => bars
            .get(*idx as usize)
            .map(|(genre, _)| genre.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(bars.len())
        .y_label_formatter(&label_for)
        .x_desc("Count")
        .draw()
        .map_err(chart_error)?;

    // Each bar fills its own segment of the y axis, inset from the edges.
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, (_, count))| {
            let idx = idx as u32;
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(idx)),
                    (*count, SegmentValue::Exact(idx + 1)),
                ],
                BAR_COLOR.filled(),
            );
            bar.set_margin(6, 6, 0, 0);
            bar
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    info!("Chart saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ranked() -> Vec<GenreCount> {
        vec![
            GenreCount::new("International Movies", 40),
            GenreCount::new("Dramas", 35),
            GenreCount::new("Comedies", 20),
        ]
    }

    #[test]
    fn test_bar_layout_puts_largest_on_top() {
        let bars = bar_layout(&ranked());
        assert_eq!(
            bars,
            vec![
                ("Comedies".to_string(), 20),
                ("Dramas".to_string(), 35),
                ("International Movies".to_string(), 40),
            ]
        );
    }

    #[test]
    fn test_bar_layout_empty() {
        assert!(bar_layout(&[]).is_empty());
    }

    #[test]
    #[ignore = "needs system fonts for chart text"]
    fn test_render_genre_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genres.png");

        render_genre_chart(&ranked(), "Top Genres (Movies ≥ 2015)", &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
