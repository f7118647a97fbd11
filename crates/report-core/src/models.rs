//! Typed data model for the ASE charges report.
//!
//! Months are an enumerated ordinal type compared in calendar order only;
//! display labels exist purely for rendering. Monthly cell values keep the
//! "camera not operating" state distinct from a true zero-charge month until
//! the aggregation boundary.

use serde::Serialize;

/// Cell marker used by the source export when a camera was not operating or
/// reporting for a given month.
pub const NO_DATA_SENTINEL: &str = "-";

// ── Month ─────────────────────────────────────────────────────────────────────

/// A calendar month, ordered by ordinal (January = 1) and never by the
/// display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based calendar ordinal.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Month::ordinal`]. Returns `None` outside `1..=12`.
    pub fn from_ordinal(ordinal: u32) -> Option<Month> {
        Self::ALL.get(ordinal.checked_sub(1)? as usize).copied()
    }

    /// Three-letter abbreviation, e.g. `"Jan"`.
    pub fn short_name(self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Display label for a given year, e.g. `"Jan 2023"`.
    pub fn label(self, year: i32) -> String {
        format!("{} {}", self.short_name(), year)
    }
}

// ── MonthWindow ───────────────────────────────────────────────────────────────

/// An inclusive, calendar-ordered span of months within one target year.
///
/// The production report runs over January–November (11 months); tests use
/// narrower windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    year: i32,
    months: Vec<Month>,
}

impl MonthWindow {
    /// Build the window `first..=last` of `year`. `last` must not precede
    /// `first`.
    pub fn new(year: i32, first: Month, last: Month) -> MonthWindow {
        assert!(
            first.ordinal() <= last.ordinal(),
            "window end {:?} precedes start {:?}",
            last,
            first
        );
        let months = (first.ordinal()..=last.ordinal())
            .map(|o| Month::from_ordinal(o).unwrap())
            .collect();
        MonthWindow { year, months }
    }

    /// The standard report window: January–November of `year`.
    pub fn january_to_november(year: i32) -> MonthWindow {
        MonthWindow::new(year, Month::January, Month::November)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Months in calendar order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Normalized header naming the column for `month`: the first of the
    /// month in `DD-MM-YYYY` form, e.g. `"01-01-2023"`.
    pub fn column_label(&self, month: Month) -> String {
        format!("01-{:02}-{}", month.ordinal(), self.year)
    }

    /// Display labels for every month of the window, in calendar order.
    pub fn display_labels(&self) -> Vec<String> {
        self.months.iter().map(|m| m.label(self.year)).collect()
    }
}

// ── MonthlyValue ──────────────────────────────────────────────────────────────

/// One month's cell for one camera: either an observed charge count or the
/// "camera not operating" state the source encodes as `"-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyValue {
    Observed(u64),
    NotOperating,
}

impl MonthlyValue {
    /// Parse a raw cell. The sentinel maps to [`MonthlyValue::NotOperating`];
    /// anything else must be a non-negative integer. Returns `None` when the
    /// cell is neither (the caller attaches row/column context).
    pub fn from_cell(cell: &str) -> Option<MonthlyValue> {
        let trimmed = cell.trim();
        if trimmed == NO_DATA_SENTINEL {
            return Some(MonthlyValue::NotOperating);
        }
        trimmed.parse::<u64>().ok().map(MonthlyValue::Observed)
    }

    /// Charge count for aggregation: a non-operating month contributes zero.
    pub fn charges(self) -> u64 {
        match self {
            MonthlyValue::Observed(n) => n,
            MonthlyValue::NotOperating => 0,
        }
    }

    pub fn is_observed(self) -> bool {
        matches!(self, MonthlyValue::Observed(_))
    }
}

// ── CleanRecord ───────────────────────────────────────────────────────────────

/// One enforcement camera after cleaning: identifier, label and one value per
/// window month in calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    pub site_code: String,
    pub location: String,
    /// Window-ordered monthly values, same length as the window.
    pub values: Vec<MonthlyValue>,
}

impl CleanRecord {
    /// Total charges across the window. Always recomputed from the values.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|v| v.charges()).sum()
    }

    /// Whether the camera reported in at least one window month.
    pub fn has_activity(&self) -> bool {
        self.values.iter().any(|v| v.is_observed())
    }
}

// ── MonthlySummary ────────────────────────────────────────────────────────────

/// Charges for one window month summed across all retained cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub month: Month,
    pub total_charges: u64,
}

// ── AggregateStatistics ───────────────────────────────────────────────────────

/// Descriptive statistics over the per-month totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStatistics {
    /// Sum of all per-month totals (equivalently, of all per-camera totals).
    pub grand_total: u64,
    /// Grand total divided by the number of window months.
    pub mean: f64,
    /// Sample standard deviation (n−1 divisor) of the per-month totals.
    pub std_dev: f64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Month ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_month_ordinal_round_trip() {
        for ordinal in 1..=12 {
            let month = Month::from_ordinal(ordinal).unwrap();
            assert_eq!(month.ordinal(), ordinal);
        }
    }

    #[test]
    fn test_month_from_ordinal_out_of_range() {
        assert!(Month::from_ordinal(0).is_none());
        assert!(Month::from_ordinal(13).is_none());
    }

    #[test]
    fn test_month_orders_by_calendar_not_label() {
        // Lexically "Apr" < "Jan", but calendar order must win.
        assert!(Month::January < Month::April);
        assert!(Month::November > Month::July);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(Month::January.label(2023), "Jan 2023");
        assert_eq!(Month::November.label(2023), "Nov 2023");
    }

    // ── MonthWindow ───────────────────────────────────────────────────────────

    #[test]
    fn test_window_january_to_november_has_eleven_months() {
        let window = MonthWindow::january_to_november(2023);
        assert_eq!(window.len(), 11);
        assert_eq!(window.months()[0], Month::January);
        assert_eq!(window.months()[10], Month::November);
    }

    #[test]
    fn test_window_column_labels() {
        let window = MonthWindow::january_to_november(2023);
        assert_eq!(window.column_label(Month::January), "01-01-2023");
        assert_eq!(window.column_label(Month::November), "01-11-2023");
    }

    #[test]
    fn test_window_display_labels_in_calendar_order() {
        let window = MonthWindow::new(2023, Month::January, Month::April);
        assert_eq!(
            window.display_labels(),
            vec!["Jan 2023", "Feb 2023", "Mar 2023", "Apr 2023"]
        );
    }

    #[test]
    #[should_panic(expected = "precedes")]
    fn test_window_rejects_reversed_span() {
        MonthWindow::new(2023, Month::June, Month::March);
    }

    // ── MonthlyValue ──────────────────────────────────────────────────────────

    #[test]
    fn test_value_sentinel_maps_to_not_operating() {
        assert_eq!(
            MonthlyValue::from_cell("-"),
            Some(MonthlyValue::NotOperating)
        );
    }

    #[test]
    fn test_value_integer_cell() {
        assert_eq!(
            MonthlyValue::from_cell("1024"),
            Some(MonthlyValue::Observed(1024))
        );
    }

    #[test]
    fn test_value_whitespace_is_tolerated() {
        assert_eq!(
            MonthlyValue::from_cell(" 42 "),
            Some(MonthlyValue::Observed(42))
        );
    }

    #[test]
    fn test_value_garbage_cell_rejected() {
        assert!(MonthlyValue::from_cell("n/a").is_none());
        assert!(MonthlyValue::from_cell("12.5").is_none());
        assert!(MonthlyValue::from_cell("-3").is_none());
    }

    #[test]
    fn test_value_charges_resolves_not_operating_to_zero() {
        assert_eq!(MonthlyValue::NotOperating.charges(), 0);
        assert_eq!(MonthlyValue::Observed(17).charges(), 17);
    }

    #[test]
    fn test_value_coercion_is_idempotent() {
        // Coercing an already-coerced value yields the same count.
        let once = MonthlyValue::from_cell("-").unwrap().charges();
        let twice = MonthlyValue::from_cell(&once.to_string()).unwrap().charges();
        assert_eq!(once, twice);
    }

    // ── CleanRecord ───────────────────────────────────────────────────────────

    #[test]
    fn test_record_total_is_sum_of_values() {
        let record = CleanRecord {
            site_code: "A001".to_string(),
            location: "King St at Yonge".to_string(),
            values: vec![
                MonthlyValue::Observed(10),
                MonthlyValue::NotOperating,
                MonthlyValue::Observed(20),
            ],
        };
        assert_eq!(record.total(), 30);
    }

    #[test]
    fn test_record_has_activity() {
        let active = CleanRecord {
            site_code: "A001".to_string(),
            location: "x".to_string(),
            values: vec![MonthlyValue::NotOperating, MonthlyValue::Observed(0)],
        };
        let silent = CleanRecord {
            site_code: "A002".to_string(),
            location: "y".to_string(),
            values: vec![MonthlyValue::NotOperating, MonthlyValue::NotOperating],
        };
        assert!(active.has_activity());
        assert!(!silent.has_activity());
    }
}
