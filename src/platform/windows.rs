//! Windows implementations of platform helpers (best-effort, minimal ACL awareness).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; we do not attempt ACL management here,
//!   so "owner-only" directories inherit the parent's ACL.
//! - Directory fsync is not supported via std; it is a no-op.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Create a single directory. Fails with `AlreadyExists` if the path is taken.
pub fn create_dir_owner_only(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
