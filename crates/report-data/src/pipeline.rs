//! Top-level report pipeline.
//!
//! Chains loading, header normalization, window selection, cell coercion and
//! aggregation into a single call, returning a [`ReportData`] ready for the
//! render layer. Any stage failure aborts the run; nothing downstream sees a
//! partial transform.

use std::path::Path;

use report_core::error::Result;
use report_core::models::{AggregateStatistics, CleanRecord, MonthWindow, MonthlySummary};
use tracing::info;

use crate::{aggregate, coerce, loader, normalize, select};

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`run_report`].
#[derive(Debug, Clone)]
pub struct ReportData {
    /// Retained cameras with coerced monthly values.
    pub records: Vec<CleanRecord>,
    /// Per-month totals in calendar order, one per window month.
    pub summaries: Vec<MonthlySummary>,
    /// Grand total, mean and sample standard deviation.
    pub stats: AggregateStatistics,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline over the CSV at `path` for the given window.
///
/// 1. Load the raw table (verbatim strings).
/// 2. Normalize serial-date headers to `DD-MM-YYYY`.
/// 3. Select identifier and window month columns; drop inactive cameras.
/// 4. Coerce cells into typed monthly values.
/// 5. Aggregate per-month totals and statistics.
pub fn run_report(path: &Path, window: &MonthWindow) -> Result<ReportData> {
    let mut table = loader::load_raw_table(path)?;
    normalize::normalize_headers(&mut table)?;
    let rows = select::select_window(&table, window)?;
    let records = coerce::coerce_records(rows, window)?;

    let summaries = aggregate::summarize(&records, window);
    let stats = aggregate::statistics(&summaries);

    info!(
        "Report over {} cameras, {} months, {} charges",
        records.len(),
        window.len(),
        stats.grand_total
    );

    Ok(ReportData {
        records,
        summaries,
        stats,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
