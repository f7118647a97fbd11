mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::models::MonthWindow;
use report_core::revenue;
use report_core::settings::Settings;
use report_data::{aggregate, pipeline};
use report_render::{chart, json, table};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("ASE report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, year: {}",
        settings.input.display(),
        settings.year
    );

    let window = MonthWindow::january_to_november(settings.year);

    // The whole transform runs before anything is written: a failed run
    // produces no artifacts.
    let data = pipeline::run_report(&settings.input, &window)?;
    let range = revenue::estimate_range(data.stats.grand_total);

    if settings.json {
        let value = json::summary_value(&window, &data.summaries, &data.stats, &range);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", table::summary_table(&data.summaries, &data.stats, &window));
        println!();

        for line in table::statistics_lines(&data.stats, &window) {
            println!("{}", line);
        }
        println!();

        let top = aggregate::rank_highest(&data.summaries, 3);
        for line in table::ranking_lines("Months with most charges", &top, window.year()) {
            println!("{}", line);
        }
        let bottom = aggregate::rank_lowest(&data.summaries, 3);
        for line in table::ranking_lines("Months with fewest charges", &bottom, window.year()) {
            println!("{}", line);
        }
        println!();

        for line in table::revenue_lines(&range, data.stats.grand_total) {
            println!("{}", line);
        }
    }

    if !settings.no_charts {
        bootstrap::ensure_charts_dir(&settings.charts_dir)?;
        let files = chart::render_report_charts(&settings.charts_dir, &window, &data.summaries)?;
        tracing::info!("Wrote chart {}", files.full.display());
    }

    Ok(())
}
