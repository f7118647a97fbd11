//! Text rendering of the monthly summary, statistics and rankings.
//!
//! One fixed-label value row under a `Total` plus per-month header, columns
//! sized to their widest cell, numbers right-aligned with thousands
//! separators.

use report_core::formatting::{format_count, format_currency};
use report_core::models::{AggregateStatistics, MonthWindow, MonthlySummary};
use report_core::revenue::RevenueRange;

/// Fixed label of the single value row.
pub const ROW_LABEL: &str = "NUMBER OF CHARGES";

const COLUMN_GAP: &str = "  ";

// ── Summary table ─────────────────────────────────────────────────────────────

/// Render the one-row summary table.
///
/// Header: a blank label column, `Total`, then every window month in
/// calendar order. Value row: [`ROW_LABEL`], the grand total, then the
/// per-month totals.
pub fn summary_table(
    summaries: &[MonthlySummary],
    stats: &AggregateStatistics,
    window: &MonthWindow,
) -> String {
    let mut headers: Vec<String> = vec![" ".to_string(), "Total".to_string()];
    headers.extend(window.display_labels());

    let mut values: Vec<String> = vec![ROW_LABEL.to_string(), format_count(stats.grand_total)];
    values.extend(summaries.iter().map(|s| format_count(s.total_charges)));

    let widths: Vec<usize> = headers
        .iter()
        .zip(&values)
        .map(|(h, v)| h.len().max(v.len()))
        .collect();

    let header_line = render_line(&headers, &widths);
    let value_line = render_line(&values, &widths);
    format!("{}\n{}\n", header_line, value_line)
}

/// Pad each cell to its column width; the label column is left-aligned,
/// numeric columns right-aligned.
fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i == 0 {
                format!("{:<w$}", cell)
            } else {
                format!("{:>w$}", cell)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

// ── Statistics and rankings ───────────────────────────────────────────────────

/// Mean and standard deviation lines.
pub fn statistics_lines(stats: &AggregateStatistics, window: &MonthWindow) -> Vec<String> {
    vec![
        format!(
            "Mean charges per month ({} months): {:.1}",
            window.len(),
            stats.mean
        ),
        format!("Standard deviation (sample): {:.1}", stats.std_dev),
    ]
}

/// A titled ranking listing, one `1. Mon YYYY  1,234` line per entry.
pub fn ranking_lines(title: &str, ranked: &[MonthlySummary], year: i32) -> Vec<String> {
    let mut lines = vec![format!("{}:", title)];
    lines.extend(ranked.iter().enumerate().map(|(i, s)| {
        format!(
            "  {}. {}  {}",
            i + 1,
            s.month.label(year),
            format_count(s.total_charges)
        )
    }));
    lines
}

/// Estimated revenue range lines for the grand total.
pub fn revenue_lines(range: &RevenueRange, grand_total: u64) -> Vec<String> {
    vec![
        format!(
            "Estimated revenue range for {} charges:",
            format_count(grand_total)
        ),
        format!("  lower bound: {}", format_currency(range.lower)),
        format!("  upper bound: {}", format_currency(range.upper)),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::models::Month;
    use report_core::revenue;

    fn summaries() -> Vec<MonthlySummary> {
        vec![
            MonthlySummary {
                month: Month::January,
                total_charges: 20_955,
            },
            MonthlySummary {
                month: Month::February,
                total_charges: 19_752,
            },
        ]
    }

    fn stats() -> AggregateStatistics {
        AggregateStatistics {
            grand_total: 40_707,
            mean: 20_353.5,
            std_dev: 850.6,
        }
    }

    #[test]
    fn test_summary_table_layout() {
        let window = MonthWindow::new(2023, Month::January, Month::February);
        let table = summary_table(&summaries(), &stats(), &window);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Total"));
        assert!(lines[0].contains("Jan 2023"));
        assert!(lines[0].contains("Feb 2023"));
        assert!(lines[1].starts_with(ROW_LABEL));
        assert!(lines[1].contains("40,707"));
        assert!(lines[1].contains("20,955"));
        assert!(lines[1].contains("19,752"));
    }

    #[test]
    fn test_summary_table_total_precedes_months() {
        let window = MonthWindow::new(2023, Month::January, Month::February);
        let table = summary_table(&summaries(), &stats(), &window);
        let value_line = table.lines().nth(1).unwrap();

        let total_at = value_line.find("40,707").unwrap();
        let jan_at = value_line.find("20,955").unwrap();
        assert!(total_at < jan_at);
    }

    #[test]
    fn test_statistics_lines() {
        let window = MonthWindow::new(2023, Month::January, Month::February);
        let lines = statistics_lines(&stats(), &window);
        assert!(lines[0].contains("2 months"));
        assert!(lines[0].contains("20353.5"));
        assert!(lines[1].contains("850.6"));
    }

    #[test]
    fn test_ranking_lines_are_numbered() {
        let lines = ranking_lines("Busiest months", &summaries(), 2023);
        assert_eq!(lines[0], "Busiest months:");
        assert_eq!(lines[1], "  1. Jan 2023  20,955");
        assert_eq!(lines[2], "  2. Feb 2023  19,752");
    }

    #[test]
    fn test_revenue_lines_match_schedule_bounds() {
        let range = revenue::estimate_range(345_908);
        let lines = revenue_lines(&range, 345_908);
        assert!(lines[0].contains("345,908"));
        assert!(lines[1].contains("$1,729,540.00"));
        assert!(lines[2].contains("$203,393,904.00"));
    }
}
