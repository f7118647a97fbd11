//! Date-header normalization over a loaded table.
//!
//! Rewrites every serial day-offset header to its `DD-MM-YYYY` date so the
//! selector can address month columns by calendar label. Non-numeric headers
//! are untouched; running the pass twice changes nothing.

use report_core::error::Result;
use report_core::serial_date;
use tracing::debug;

use crate::loader::RawTable;

/// Normalize the table's headers in place.
///
/// Propagates [`report_core::ReportError::DateConversion`] for any numeric
/// header outside the plausible calendar range.
pub fn normalize_headers(table: &mut RawTable) -> Result<()> {
    let mut rewritten = 0usize;
    for header in &mut table.headers {
        let normalized = serial_date::normalize_header(header)?;
        if normalized != *header {
            rewritten += 1;
            *header = normalized;
        }
    }
    debug!("Normalized {} serial date headers", rewritten);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
