//! CSV loading for the ASE charges report.
//!
//! Reads the wide-format export into an in-memory table, preserving column
//! headers and cell strings verbatim. All type coercion happens downstream.

use std::path::Path;

use report_core::error::{ReportError, Result};
use tracing::debug;

// ── RawTable ──────────────────────────────────────────────────────────────────

/// The raw delimited table: one header row plus one row per camera, all
/// values kept as the strings the export contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the first header matching `predicate`.
    pub fn find_column(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|h| predicate(h))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load `path` into a [`RawTable`].
///
/// Fails with [`ReportError::Input`] when the file cannot be opened and
/// [`ReportError::EmptyTable`] when it holds a header but no data rows.
pub fn load_raw_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|source| ReportError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(ReportError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "Loaded {} rows x {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(RawTable { headers, rows })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
