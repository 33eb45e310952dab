//! Core library for `downloads_sorter`.
//!
//! Sorts the immediate files of one directory into per-extension
//! subdirectories (`report.pdf` -> `pdf/report.pdf`, `README` ->
//! `no-extensions/README`). Subdirectories already present are left alone.
//!
//! ```no_run
//! use downloads_sorter::{organize, source_dir_from_env, Config};
//!
//! let source = source_dir_from_env()?;
//! let report = organize(&Config::new(source))?;
//! println!("moved {} file(s)", report.moved_count());
//! # Ok::<(), downloads_sorter::SortError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod organize;
pub mod output;
pub mod platform;

pub use config::{
    Config, ExecutionMode, LogLevel, SOURCE_DIR_ENV, path_has_symlink_ancestor, resolve_source_dir,
    source_dir_from_env,
};
pub use errors::SortError;
pub use fs_ops::{NO_EXTENSION_LABEL, ensure_label_dir, extension_label, list_entries, relocate};
pub use organize::{Outcome, SortReport, organize};
