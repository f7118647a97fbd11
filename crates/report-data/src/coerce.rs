//! Cell coercion: raw month cells into typed [`MonthlyValue`]s.
//!
//! Sentinels become [`MonthlyValue::NotOperating`]; everything else must
//! parse as a non-negative integer. A cell that is neither aborts the run
//! with full row/column context. No silent drops.

use report_core::error::{ReportError, Result};
use report_core::models::{CleanRecord, MonthWindow, MonthlyValue};

use crate::select::SelectedRow;

/// Coerce every retained row into a [`CleanRecord`].
pub fn coerce_records(rows: Vec<SelectedRow>, window: &MonthWindow) -> Result<Vec<CleanRecord>> {
    rows.into_iter()
        .map(|row| coerce_row(row, window))
        .collect()
}

fn coerce_row(row: SelectedRow, window: &MonthWindow) -> Result<CleanRecord> {
    let values: Vec<MonthlyValue> = row
        .cells
        .iter()
        .zip(window.months())
        .map(|(cell, &month)| {
            MonthlyValue::from_cell(cell).ok_or_else(|| ReportError::Parse {
                column: window.column_label(month),
                site: row.site_code.clone(),
                value: cell.clone(),
            })
        })
        .collect::<Result<_>>()?;

    Ok(CleanRecord {
        site_code: row.site_code,
        location: row.location,
        values,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::models::Month;

    fn window_jan_to_mar() -> MonthWindow {
        MonthWindow::new(2023, Month::January, Month::March)
    }

    fn row(site: &str, cells: &[&str]) -> SelectedRow {
        SelectedRow {
            site_code: site.to_string(),
            location: "somewhere".to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_coerces_counts_and_sentinels() {
        let records =
            coerce_records(vec![row("A001", &["10", "-", "20"])], &window_jan_to_mar()).unwrap();
        assert_eq!(
            records[0].values,
            vec![
                MonthlyValue::Observed(10),
                MonthlyValue::NotOperating,
                MonthlyValue::Observed(20),
            ]
        );
        assert_eq!(records[0].total(), 30);
    }

    #[test]
    fn test_invalid_cell_reports_column_and_site() {
        let err = coerce_records(vec![row("A007", &["10", "oops", "20"])], &window_jan_to_mar())
            .unwrap_err();
        match err {
            ReportError::Parse {
                column,
                site,
                value,
            } => {
                assert_eq!(column, "01-02-2023");
                assert_eq!(site, "A007");
                assert_eq!(value, "oops");
            }
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn test_empty_cell_is_a_parse_error() {
        let err =
            coerce_records(vec![row("A001", &["10", "", "20"])], &window_jan_to_mar()).unwrap_err();
        assert!(matches!(err, ReportError::Parse { .. }));
    }

    #[test]
    fn test_identifier_fields_are_carried_over() {
        let records =
            coerce_records(vec![row("A001", &["1", "2", "3"])], &window_jan_to_mar()).unwrap();
        assert_eq!(records[0].site_code, "A001");
        assert_eq!(records[0].location, "somewhere");
    }
}
