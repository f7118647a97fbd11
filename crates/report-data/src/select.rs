//! Column selection and row filtering.
//!
//! Keeps the two identifier columns plus the window's month columns, then
//! drops any camera whose cells are the sentinel in every month of the
//! window. A camera active for a single month stays in.

use report_core::error::{ReportError, Result};
use report_core::models::{MonthWindow, NO_DATA_SENTINEL};
use tracing::debug;

use crate::loader::RawTable;

/// Exact header of the camera identifier column.
pub const SITE_CODE_HEADER: &str = "Site Code";
/// Prefix of the free-text location column (the export suffixes it with a
/// footnote marker).
pub const LOCATION_HEADER_PREFIX: &str = "Location";

// ── SelectedRow ───────────────────────────────────────────────────────────────

/// One retained camera with its identifier columns and the raw cells of the
/// window months, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRow {
    pub site_code: String,
    pub location: String,
    /// Raw month cells, still strings; one per window month.
    pub cells: Vec<String>,
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Project `table` onto the identifier and window month columns and drop
/// rows with no activity anywhere in the window.
///
/// Headers must already be normalized; month columns are located by their
/// first-of-month `DD-MM-YYYY` labels. A missing identifier or month column
/// is a fatal [`ReportError::MissingColumn`].
pub fn select_window(table: &RawTable, window: &MonthWindow) -> Result<Vec<SelectedRow>> {
    let site_idx = table
        .find_column(|h| h == SITE_CODE_HEADER)
        .ok_or_else(|| ReportError::MissingColumn(SITE_CODE_HEADER.to_string()))?;
    let location_idx = table
        .find_column(|h| h.starts_with(LOCATION_HEADER_PREFIX))
        .ok_or_else(|| ReportError::MissingColumn(LOCATION_HEADER_PREFIX.to_string()))?;

    let month_indices: Vec<usize> = window
        .months()
        .iter()
        .map(|&month| {
            let label = window.column_label(month);
            table
                .find_column(|h| h == label)
                .ok_or(ReportError::MissingColumn(label))
        })
        .collect::<Result<_>>()?;

    let mut selected = Vec::new();
    let mut dropped = 0usize;
    for row in &table.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").to_string();

        let cells: Vec<String> = month_indices.iter().map(|&i| cell(i)).collect();

        // Keep the row iff at least one window month holds a non-sentinel
        // value.
        if cells.iter().all(|c| c.trim() == NO_DATA_SENTINEL) {
            dropped += 1;
            continue;
        }

        selected.push(SelectedRow {
            site_code: cell(site_idx),
            location: cell(location_idx),
            cells,
        });
    }

    debug!(
        "Selected {} cameras, dropped {} with no activity in the window",
        selected.len(),
        dropped
    );

    Ok(selected)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
