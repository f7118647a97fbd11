use std::path::PathBuf;

use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Batch report over automated speed enforcement charge counts
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ase-report",
    about = "Monthly summary, statistics and charts for ASE charge data",
    version
)]
pub struct Settings {
    /// Path to the wide-format charges CSV export
    pub input: PathBuf,

    /// Target year for the January–November report window
    #[arg(long, default_value_t = 2023)]
    pub year: i32,

    /// Directory the bar charts are written to
    #[arg(long, default_value = "charts")]
    pub charts_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Emit the summary as JSON instead of the text table
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
