//! Atomic rename helper.
//! - Refuses to replace an existing destination (POSIX rename would overwrite it).
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

use crate::platform::fsync_dir;

/// Fail with `AlreadyExists` if anything, including a dangling symlink, sits at `dst`.
pub(super) fn ensure_vacant(dst: &Path) -> io::Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already has an entry with this name",
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

pub(super) fn rename_no_clobber(src: &Path, dst: &Path) -> io::Result<()> {
    ensure_vacant(dst)?;
    fs::rename(src, dst)?;

    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = fsync_dir(parent);
    }
    Ok(())
}
