use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised. All output
/// goes to stderr so report text on stdout stays clean.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let normalised = match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => return setup_with_directive(&other.to_lowercase()),
    };
    setup_with_directive(normalised)
}

fn setup_with_directive(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Output bootstrap ───────────────────────────────────────────────────────────

/// Create the chart output directory (and any missing parents).
pub fn ensure_charts_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_charts_dir_creates_nested_path() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = tmp.path().join("out").join("charts");

        ensure_charts_dir(&dir).expect("ensure_charts_dir should succeed");
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_charts_dir_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = tmp.path().join("charts");

        ensure_charts_dir(&dir).unwrap();
        ensure_charts_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
