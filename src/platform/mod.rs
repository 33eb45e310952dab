//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{create_dir_owner_only, fsync_dir, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{create_dir_owner_only, fsync_dir, open_log_file_secure_append};
