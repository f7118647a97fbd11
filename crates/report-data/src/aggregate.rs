//! Aggregation over clean records: per-month totals, grand total,
//! descriptive statistics and month rankings.
//!
//! All sums are exact integer arithmetic, so the grand total equals both the
//! sum of per-month totals and the sum of per-camera totals regardless of
//! iteration order.

use report_core::models::{AggregateStatistics, CleanRecord, MonthWindow, MonthlySummary};

// ── Per-month totals ──────────────────────────────────────────────────────────

/// Sum each window month's column across all records, in calendar order.
pub fn summarize(records: &[CleanRecord], window: &MonthWindow) -> Vec<MonthlySummary> {
    window
        .months()
        .iter()
        .enumerate()
        .map(|(idx, &month)| MonthlySummary {
            month,
            total_charges: records
                .iter()
                .map(|r| r.values.get(idx).map(|v| v.charges()).unwrap_or(0))
                .sum(),
        })
        .collect()
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Grand total, mean and sample standard deviation over the per-month totals.
///
/// The standard deviation uses the n−1 divisor and is `0.0` for fewer than
/// two months.
pub fn statistics(summaries: &[MonthlySummary]) -> AggregateStatistics {
    let grand_total: u64 = summaries.iter().map(|s| s.total_charges).sum();
    let n = summaries.len();

    let mean = if n == 0 {
        0.0
    } else {
        grand_total as f64 / n as f64
    };

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = summaries
            .iter()
            .map(|s| {
                let d = s.total_charges as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    };

    AggregateStatistics {
        grand_total,
        mean,
        std_dev,
    }
}

// ── Rankings ──────────────────────────────────────────────────────────────────

/// The `k` months with the highest totals, ties broken by calendar order
/// (earlier month first).
pub fn rank_highest(summaries: &[MonthlySummary], k: usize) -> Vec<MonthlySummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        b.total_charges
            .cmp(&a.total_charges)
            .then(a.month.cmp(&b.month))
    });
    ranked.truncate(k);
    ranked
}

/// The `k` months with the lowest totals, ties broken by calendar order
/// (earlier month first).
pub fn rank_lowest(summaries: &[MonthlySummary], k: usize) -> Vec<MonthlySummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| {
        a.total_charges
            .cmp(&b.total_charges)
            .then(a.month.cmp(&b.month))
    });
    ranked.truncate(k);
    ranked
}

// ── Tests ─────────────────────────────────────────────────────────────────────
