//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The directory to sort always comes from DOWNLOADS_PATH; flags only tune the run.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::types::{Config, ExecutionMode, LogLevel};

/// Sort the folder named by DOWNLOADS_PATH into per-extension subfolders.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort a downloads folder into per-extension subdirectories",
    after_help = "The folder to sort is read from the DOWNLOADS_PATH environment variable."
)]
pub struct Args {
    /// Dry-run: log planned moves but do not modify the filesystem.
    #[arg(long, help = "Show what would be moved, but do not create or move anything")]
    pub dry_run: bool,

    /// Process files one at a time in name order instead of in parallel.
    #[arg(long, conflicts_with = "jobs", help = "Move files one at a time, in name order")]
    pub sequential: bool,

    /// Worker threads for parallel moves (default: one per CPU).
    #[arg(short = 'j', long, value_name = "N", help = "Number of worker threads for parallel moves")]
    pub jobs: Option<NonZeroUsize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file (created 0600; refused under a symlinked directory).
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Execution mode selected by flags.
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel {
                jobs: self.jobs.map(NonZeroUsize::get),
            }
        }
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        cfg.mode = self.execution_mode();
    }
}

pub fn parse() -> Args {
    Args::parse()
}
