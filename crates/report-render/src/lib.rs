//! Render layer for the ASE charges report.
//!
//! Terminal-facing text output (summary table, statistics and ranking
//! lines), a JSON mirror of the summary, and plotters bar charts. Rendering
//! never feeds back into the aggregate data.

pub mod chart;
pub mod json;
pub mod table;
