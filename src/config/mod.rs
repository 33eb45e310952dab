//! Config module.
//! Provides configuration types, the source-directory resolver and log path checks.

pub mod paths;
pub mod source;
pub mod types;

pub use paths::path_has_symlink_ancestor;
pub use source::{resolve_source_dir, source_dir_from_env};
pub use types::{Config, ExecutionMode, LogLevel};

/// Environment variable naming the directory to organize.
pub const SOURCE_DIR_ENV: &str = "DOWNLOADS_PATH";
