//! Application orchestrator.
//! Initializes logging, resolves DOWNLOADS_PATH, applies CLI overrides,
//! runs the sort and prints the summary.

use anyhow::Result;
use tracing::{debug, error, info};

use downloads_sorter::cli::Args;
use downloads_sorter::output as out;
use downloads_sorter::{Config, SortError, organize, source_dir_from_env};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Logging settings come from flags only, so they are known before the source is resolved.
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    // Hold the guard until the end so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting downloads_sorter: {:?}", args);

    cfg.source_dir = source_dir_from_env().map_err(log_fatal)?;

    let report = organize(&cfg).map_err(log_fatal)?;
    info!(
        source = %report.source_dir.display(),
        moved = report.moved_count(),
        failed = report.failed_count(),
        dirs_created = report.dirs_created(),
        "Sort finished"
    );
    out::print_report(&report);

    // Per-entry failures are reported above; they do not make the run fail.
    Ok(())
}

fn log_fatal(e: SortError) -> anyhow::Error {
    match &e {
        SortError::ConfigMissing { var } => {
            error!(kind = e.kind(), var, "Source directory is not configured")
        }
        SortError::ConfigInvalid { var, path, reason } => {
            error!(kind = e.kind(), var, path = %path.display(), %reason, "Source directory is not usable")
        }
        SortError::ListingFailed { path, source } => {
            error!(kind = e.kind(), path = %path.display(), error = %source, "Could not list source directory")
        }
        other => error!(kind = other.kind(), error = %other, "Sort aborted"),
    }
    e.into()
}
