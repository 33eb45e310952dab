//! Run driver.
//! Lists the source directory once, relocates every non-directory entry
//! (sequentially or one rayon task per entry) and gathers one `Outcome` per
//! entry into a `SortReport`. Only configuration and listing errors abort.

use rayon::prelude::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::{Config, ExecutionMode};
use crate::errors::SortError;
use crate::fs_ops::{Relocation, SourceEntry, describe_io_error, extension_label, list_entries, relocate};

/// What happened to one entry.
#[derive(Debug)]
pub struct Outcome {
    pub file_name: OsString,
    pub label: OsString,
    pub result: Result<Relocation, SortError>,
}

/// Aggregated outcomes of a run, in listing order.
#[derive(Debug)]
pub struct SortReport {
    pub source_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<Outcome>,
    /// Subdirectories found in the source and left untouched.
    pub skipped_dirs: usize,
}

impl SortReport {
    /// Entries that were moved (or would be, in dry-run).
    pub fn moved(&self) -> impl Iterator<Item = (&Outcome, &Relocation)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o, r)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Outcome, &SortError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }

    pub fn moved_count(&self) -> usize {
        self.moved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Label directories this run created for files it moved. A directory
    /// created just before a failed rename is not counted.
    pub fn dirs_created(&self) -> usize {
        self.moved().filter(|(_, r)| r.created_dir).count()
    }
}

/// Sort `cfg.source_dir`. Per-entry failures end up in the report, not in `Err`.
pub fn organize(cfg: &Config) -> Result<SortReport, SortError> {
    let source = cfg.source_dir.as_path();
    let entries = list_entries(source)?;

    let (dirs, files): (Vec<SourceEntry>, Vec<SourceEntry>) =
        entries.into_iter().partition(|e| e.is_dir);
    for d in &dirs {
        debug!(dir = %d.name.to_string_lossy(), "Skipping subdirectory");
    }
    info!(
        source = %source.display(),
        files = files.len(),
        skipped_dirs = dirs.len(),
        dry_run = cfg.dry_run,
        "Sorting downloads"
    );

    let outcomes: Vec<Outcome> = match cfg.mode {
        ExecutionMode::Sequential => files
            .iter()
            .map(|entry| {
                let outcome = process_entry(source, entry, cfg.dry_run);
                if let Err(e) = &outcome.result {
                    log_failure(&outcome, e);
                }
                outcome
            })
            .collect(),
        ExecutionMode::Parallel { jobs } => {
            let outcomes = run_parallel(source, &files, jobs, cfg.dry_run);
            for outcome in &outcomes {
                if let Err(e) = &outcome.result {
                    log_failure(outcome, e);
                }
            }
            outcomes
        }
    };

    Ok(SortReport {
        source_dir: source.to_path_buf(),
        dry_run: cfg.dry_run,
        outcomes,
        skipped_dirs: dirs.len(),
    })
}

fn run_parallel(source: &Path, files: &[SourceEntry], jobs: Option<usize>, dry_run: bool) -> Vec<Outcome> {
    let fan_out = || -> Vec<Outcome> {
        files
            .par_iter()
            .map(|entry| process_entry(source, entry, dry_run))
            .collect()
    };

    let Some(n) = jobs else {
        return fan_out();
    };
    match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
        Ok(pool) => pool.install(fan_out),
        Err(e) => {
            warn!(error = %e, jobs = n, "Could not build worker pool; using the shared pool");
            fan_out()
        }
    }
}

fn process_entry(source: &Path, entry: &SourceEntry, dry_run: bool) -> Outcome {
    let label = extension_label(&entry.name).to_owned();
    let result = relocate(source, &entry.name, &label, dry_run);
    Outcome {
        file_name: entry.name.clone(),
        label,
        result,
    }
}

fn log_failure(outcome: &Outcome, e: &SortError) {
    let reason = e
        .io_source()
        .map(describe_io_error)
        .unwrap_or_else(|| e.to_string());
    error!(
        kind = e.kind(),
        file = %outcome.file_name.to_string_lossy(),
        label = %outcome.label.to_string_lossy(),
        reason = %reason,
        "{e}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn cfg_for(dir: &Path, mode: ExecutionMode) -> Config {
        let mut cfg = Config::new(dir);
        cfg.mode = mode;
        cfg
    }

    #[test]
    fn report_counts_match_tree() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("a").unwrap();
        td.child("b.txt").write_str("b").unwrap();
        td.child("README").write_str("r").unwrap();
        td.child("keep").create_dir_all().unwrap();

        let report = organize(&cfg_for(td.path(), ExecutionMode::Sequential)).unwrap();
        assert_eq!(report.moved_count(), 3);
        assert_eq!(report.failed_count(), 0);
        assert_eq!(report.skipped_dirs, 1);
        assert_eq!(report.dirs_created(), 2);

        let labels: Vec<_> = report.outcomes.iter().map(|o| o.label.to_string_lossy()).collect();
        assert_eq!(labels, ["no-extensions", "txt", "txt"]);
    }

    #[test]
    fn parallel_with_fixed_jobs_moves_everything() {
        let td = assert_fs::TempDir::new().unwrap();
        for i in 0..40 {
            td.child(format!("f{i}.{}", if i % 2 == 0 { "png" } else { "pdf" }))
                .write_str("x")
                .unwrap();
        }

        let report = organize(&cfg_for(td.path(), ExecutionMode::Parallel { jobs: Some(4) })).unwrap();
        assert_eq!(report.moved_count(), 40);
        assert_eq!(report.dirs_created(), 2);
        assert_eq!(std::fs::read_dir(td.path().join("png")).unwrap().count(), 20);
        assert_eq!(std::fs::read_dir(td.path().join("pdf")).unwrap().count(), 20);
    }

    #[test]
    fn dir_left_by_a_failed_rename_is_not_counted() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("a").unwrap();
        let entries = [
            SourceEntry { name: "a.txt".into(), is_dir: false },
            SourceEntry { name: "ghost.bin".into(), is_dir: false },
        ];
        let outcomes = entries
            .iter()
            .map(|e| process_entry(td.path(), e, false))
            .collect();
        let report = SortReport {
            source_dir: td.path().to_path_buf(),
            dry_run: false,
            outcomes,
            skipped_dirs: 0,
        };

        assert!(td.path().join("bin").is_dir());
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.dirs_created(), 1);
    }

    #[test]
    fn unreadable_source_is_fatal() {
        let td = assert_fs::TempDir::new().unwrap();
        let err = organize(&Config::new(td.path().join("missing"))).unwrap_err();
        assert!(err.is_fatal());
    }
}
