//! Data ingestion and transformation layer for the ASE charges report.
//!
//! Responsible for loading the raw CSV export, normalizing serial-date
//! headers, selecting the report window, coercing cell values, aggregating
//! per-month totals and running the top-level pipeline.

pub mod aggregate;
pub mod coerce;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod select;

pub use report_core as core;
