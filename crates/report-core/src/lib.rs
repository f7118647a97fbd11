//! Domain layer for the ASE charges report.
//!
//! Holds the typed data model (months, windows, monthly cell values), the
//! shared error enum, serial-date header conversion, number formatting,
//! the penalty-rate schedule and the CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod revenue;
pub mod serial_date;
pub mod settings;

pub use error::{ReportError, Result};
