//! Directory ensurer: make sure `source/label` exists as a directory.
//!
//! Check-then-create is not locked. Two tasks may both see the directory as
//! absent; the loser's create then fails with `AlreadyExists`, which counts as
//! success as long as a directory is what ended up there.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::SortError;
use crate::platform::create_dir_owner_only;

/// Result of a successful ensure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredDir {
    pub path: PathBuf,
    /// True only for the call that actually created the directory.
    pub created: bool,
}

/// Read-only half of [`ensure_label_dir`]: `Ok(true)` when `path` is already a
/// directory, `Ok(false)` when nothing is there. Anything else fails the same
/// way a real ensure would.
pub(super) fn check_label_dir(path: &Path) -> Result<bool, SortError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(failed(path, not_a_directory())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(failed(path, e)),
    }
}

/// Ensure `source/label` is a directory, creating it owner-only if absent.
pub fn ensure_label_dir(source: &Path, label: impl AsRef<OsStr>) -> Result<EnsuredDir, SortError> {
    let path = source.join(label.as_ref());

    if check_label_dir(&path)? {
        debug!(dir = %path.display(), "Destination directory already present");
        return Ok(EnsuredDir { path, created: false });
    }

    match create_dir_owner_only(&path) {
        Ok(()) => {
            info!(dir = %path.display(), "Created destination directory");
            Ok(EnsuredDir { path, created: true })
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                debug!(dir = %path.display(), "Destination directory created concurrently");
                Ok(EnsuredDir { path, created: false })
            }
            Ok(_) => Err(failed(&path, not_a_directory())),
            Err(e) => Err(failed(&path, e)),
        },
        Err(e) => Err(failed(&path, e)),
    }
}

fn failed(path: &Path, source: io::Error) -> SortError {
    SortError::EnsureDirFailed {
        path: path.to_path_buf(),
        source,
    }
}

fn not_a_directory() -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        "path exists but is not a directory",
    )
}
