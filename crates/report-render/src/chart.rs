//! Bar chart rendering via plotters.
//!
//! One full-window chart plus two independently scaled half-window splits,
//! bars in calendar order with thousands-separated value labels centred
//! above each bar.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use report_core::error::{ReportError, Result};
use report_core::formatting::format_count;
use report_core::models::{MonthWindow, MonthlySummary};
use tracing::info;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 640;
/// Months in the first split of a window.
const SPLIT_LEN: usize = 6;

/// Output files produced by [`render_report_charts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFiles {
    pub full: PathBuf,
    pub first_half: PathBuf,
    /// Absent when the window fits entirely in the first split.
    pub second_half: Option<PathBuf>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Render the full-window chart and the two half-window splits into `dir`.
pub fn render_report_charts(
    dir: &Path,
    window: &MonthWindow,
    summaries: &[MonthlySummary],
) -> Result<ChartFiles> {
    let year = window.year();
    let (first, second) = summaries.split_at(SPLIT_LEN.min(summaries.len()));

    let full = dir.join("charges_all_months.png");
    render_monthly_chart(&full, &span_title(year, summaries), year, summaries)?;

    let first_half = dir.join("charges_first_half.png");
    render_monthly_chart(&first_half, &span_title(year, first), year, first)?;

    let second_half = if second.is_empty() {
        None
    } else {
        let path = dir.join("charges_second_half.png");
        render_monthly_chart(&path, &span_title(year, second), year, second)?;
        Some(path)
    };

    info!("Charts written to {}", dir.display());

    Ok(ChartFiles {
        full,
        first_half,
        second_half,
    })
}

/// Render one bar chart of `summaries` to `path`.
///
/// The y-axis is scaled to the slice being drawn, so split charts get their
/// own scale.
pub fn render_monthly_chart(
    path: &Path,
    title: &str,
    year: i32,
    summaries: &[MonthlySummary],
) -> Result<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0u32..summaries.len() as u32).into_segmented(),
            0u64..y_axis_max(summaries),
        )
        .map_err(chart_err)?;

    let labels: Vec<String> = summaries.iter().map(|s| s.month.label(year)).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(summaries.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_desc("Charges")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(12)
                .data(
                    summaries
                        .iter()
                        .enumerate()
                        .map(|(i, s)| (i as u32, s.total_charges)),
                ),
        )
        .map_err(chart_err)?;

    // Value labels centred above each bar.
    let label_style = TextStyle::from(("sans-serif", 16)).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(summaries.iter().enumerate().map(|(i, s)| {
            Text::new(
                format_count(s.total_charges),
                (SegmentValue::CenterOf(i as u32), s.total_charges),
                label_style.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Chart title spanning the slice, e.g. `"ASE charges, Jan–Jun 2023"`.
fn span_title(year: i32, summaries: &[MonthlySummary]) -> String {
    match (summaries.first(), summaries.last()) {
        (Some(first), Some(last)) if first.month != last.month => format!(
            "ASE charges, {}\u{2013}{} {}",
            first.month.short_name(),
            last.month.short_name(),
            year
        ),
        (Some(only), _) => format!("ASE charges, {}", only.month.label(year)),
        _ => format!("ASE charges, {}", year),
    }
}

/// Y-axis ceiling: the tallest bar plus headroom for its value label.
fn y_axis_max(summaries: &[MonthlySummary]) -> u64 {
    let tallest = summaries.iter().map(|s| s.total_charges).max().unwrap_or(0);
    (tallest as f64 * 1.15).ceil() as u64 + 1
}

fn chart_err(err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(err.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
