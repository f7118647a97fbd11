use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the ASE charges report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input table could not be opened or read from disk.
    #[error("Failed to read input table {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be decoded.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The input table contains a header but no data rows.
    #[error("Input table {path} contains no data rows")]
    EmptyTable { path: PathBuf },

    /// A numeric column header maps to a day offset outside any plausible
    /// calendar range.
    #[error("Header {header:?} is not a valid day offset: {reason}")]
    DateConversion { header: String, reason: String },

    /// An identifier or month column expected by the report window is absent.
    #[error("Required column {0:?} not found in input table")]
    MissingColumn(String),

    /// A non-sentinel cell could not be parsed as a charge count.
    #[error("Invalid charge count {value:?} in column {column:?} for site {site}")]
    Parse {
        column: String,
        site: String,
        value: String,
    },

    /// A chart could not be rendered or written.
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
