//! Machine-readable mirror of the report summary.

use report_core::models::{AggregateStatistics, MonthWindow, MonthlySummary};
use report_core::revenue::RevenueRange;
use serde_json::{json, Value};

/// Build the JSON document emitted by `--json`.
///
/// Months appear in calendar order with their display labels; totals and
/// statistics mirror the text output exactly.
pub fn summary_value(
    window: &MonthWindow,
    summaries: &[MonthlySummary],
    stats: &AggregateStatistics,
    revenue: &RevenueRange,
) -> Value {
    let months: Vec<Value> = summaries
        .iter()
        .map(|s| {
            json!({
                "month": s.month.label(window.year()),
                "total_charges": s.total_charges,
            })
        })
        .collect();

    json!({
        "year": window.year(),
        "months": months,
        "grand_total": stats.grand_total,
        "mean_per_month": stats.mean,
        "std_dev": stats.std_dev,
        "revenue_range": {
            "lower": revenue.lower,
            "upper": revenue.upper,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::models::Month;
    use report_core::revenue;

    #[test]
    fn test_summary_value_shape() {
        let window = MonthWindow::new(2023, Month::January, Month::February);
        let summaries = vec![
            MonthlySummary {
                month: Month::January,
                total_charges: 10,
            },
            MonthlySummary {
                month: Month::February,
                total_charges: 25,
            },
        ];
        let stats = AggregateStatistics {
            grand_total: 35,
            mean: 17.5,
            std_dev: 10.6,
        };
        let range = revenue::estimate_range(35);

        let value = summary_value(&window, &summaries, &stats, &range);

        assert_eq!(value["year"], 2023);
        assert_eq!(value["grand_total"], 35);
        assert_eq!(value["months"][0]["month"], "Jan 2023");
        assert_eq!(value["months"][0]["total_charges"], 10);
        assert_eq!(value["months"][1]["total_charges"], 25);
        assert_eq!(value["revenue_range"]["lower"], 175.0);
    }

    #[test]
    fn test_months_emitted_in_calendar_order() {
        let window = MonthWindow::new(2023, Month::January, Month::March);
        let summaries: Vec<MonthlySummary> = window
            .months()
            .iter()
            .map(|&month| MonthlySummary {
                month,
                total_charges: 1,
            })
            .collect();
        let stats = AggregateStatistics {
            grand_total: 3,
            mean: 1.0,
            std_dev: 0.0,
        };
        let range = revenue::estimate_range(3);

        let value = summary_value(&window, &summaries, &stats, &range);
        let labels: Vec<&str> = value["months"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["month"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Jan 2023", "Feb 2023", "Mar 2023"]);
    }
}
