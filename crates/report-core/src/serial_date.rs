//! Serial day-offset to calendar date conversion.
//!
//! The source dataset was exported from a legacy spreadsheet whose date
//! columns survive as day counts from the epoch 1899-12-30. Purely numeric
//! headers are rewritten to `DD-MM-YYYY`; everything else passes through
//! untouched, so normalization is idempotent.

use std::sync::OnceLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::error::{ReportError, Result};

/// First calendar year accepted for a converted header.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1900;
/// Last calendar year accepted for a converted header.
pub const MAX_PLAUSIBLE_YEAR: i32 = 2100;

/// The spreadsheet day-count epoch, 30 December 1899.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("epoch is a valid date")
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("static regex"))
}

/// Whether `header` is a serial day-offset (all decimal digits).
pub fn is_serial_header(header: &str) -> bool {
    digits_re().is_match(header)
}

/// Convert a digit-string header to the calendar date it encodes.
///
/// Fails with [`ReportError::DateConversion`] when the offset does not fit,
/// overflows the calendar, or lands outside 1900–2100.
pub fn serial_to_date(header: &str) -> Result<NaiveDate> {
    let offset: i64 = header.parse().map_err(|_| ReportError::DateConversion {
        header: header.to_string(),
        reason: "offset does not fit a 64-bit day count".to_string(),
    })?;

    let delta = Duration::try_days(offset).ok_or_else(|| ReportError::DateConversion {
        header: header.to_string(),
        reason: "offset overflows the calendar".to_string(),
    })?;
    let date = epoch()
        .checked_add_signed(delta)
        .ok_or_else(|| ReportError::DateConversion {
            header: header.to_string(),
            reason: "offset overflows the calendar".to_string(),
        })?;

    let year = chrono::Datelike::year(&date);
    if !(MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year) {
        return Err(ReportError::DateConversion {
            header: header.to_string(),
            reason: format!(
                "date {} outside plausible range {}..={}",
                date, MIN_PLAUSIBLE_YEAR, MAX_PLAUSIBLE_YEAR
            ),
        });
    }

    Ok(date)
}

/// Normalize one column header.
///
/// A digit-string header becomes its `DD-MM-YYYY` calendar date; any other
/// header is returned unchanged. Same input, same output, always.
pub fn normalize_header(header: &str) -> Result<String> {
    if !is_serial_header(header) {
        return Ok(header.to_string());
    }
    let date = serial_to_date(header)?;
    Ok(date.format("%d-%m-%Y").to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
