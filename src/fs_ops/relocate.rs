//! Relocator: ensure the label directory, then rename the entry into it.
//! The file keeps its name; only its parent changes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::SortError;

use super::atomic::{ensure_vacant, rename_no_clobber};
use super::ensure::{check_label_dir, ensure_label_dir};

/// A successful relocation (or, in dry-run, a planned one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub dest: PathBuf,
    /// Whether this call created the label directory.
    pub created_dir: bool,
}

/// Move `source/file_name` to `source/label/file_name`.
///
/// Failures are returned, never retried. A directory created before a failed
/// rename is left in place. With `dry_run` nothing is touched, but the same
/// checks run so the preview fails where a real run would.
pub fn relocate(
    source: &Path,
    file_name: &OsStr,
    label: impl AsRef<OsStr>,
    dry_run: bool,
) -> Result<Relocation, SortError> {
    let from = source.join(file_name);

    if dry_run {
        let dir = source.join(label.as_ref());
        check_label_dir(&dir)?;
        let dest = dir.join(file_name);
        ensure_vacant(&dest).map_err(|e| rename_failed(&from, &dest, e))?;
        info!(src = %from.display(), dest = %dest.display(), "dry-run: would move file");
        return Ok(Relocation {
            dest,
            created_dir: false,
        });
    }

    let dir = ensure_label_dir(source, label)?;
    let dest = dir.path.join(file_name);

    rename_no_clobber(&from, &dest).map_err(|e| rename_failed(&from, &dest, e))?;
    info!(src = %from.display(), dest = %dest.display(), "Moved file");
    Ok(Relocation {
        dest,
        created_dir: dir.created,
    })
}

fn rename_failed(from: &Path, to: &Path, source: std::io::Error) -> SortError {
    SortError::RenameFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::fs;

    #[test]
    fn moves_into_label_dir_keeping_name_and_content() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("hello").unwrap();

        let r = relocate(td.path(), OsStr::new("a.txt"), "txt", false).unwrap();
        assert_eq!(r.dest, td.path().join("txt").join("a.txt"));
        assert!(r.created_dir);
        assert_eq!(fs::read_to_string(&r.dest).unwrap(), "hello");
        assert!(!td.path().join("a.txt").exists());
    }

    #[test]
    fn collision_is_rename_failure_and_source_stays() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("new").unwrap();
        td.child("txt").create_dir_all().unwrap();
        td.child("txt").child("a.txt").write_str("old").unwrap();

        let err = relocate(td.path(), OsStr::new("a.txt"), "txt", false).unwrap_err();
        assert_eq!(err.kind(), "rename_failed");
        assert!(td.path().join("a.txt").exists());
        assert_eq!(
            fs::read_to_string(td.path().join("txt").join("a.txt")).unwrap(),
            "old"
        );
    }

    #[test]
    fn ensure_failure_skips_the_move() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("x").unwrap();
        td.child("txt").write_str("a plain file named like the label").unwrap();

        let err = relocate(td.path(), OsStr::new("a.txt"), "txt", false).unwrap_err();
        assert_eq!(err.kind(), "ensure_dir_failed");
        assert!(td.path().join("a.txt").exists());
    }

    #[test]
    fn missing_entry_leaves_created_dir_behind() {
        let td = assert_fs::TempDir::new().unwrap();
        let err = relocate(td.path(), OsStr::new("ghost.bin"), "bin", false).unwrap_err();
        assert_eq!(err.kind(), "rename_failed");
        assert!(td.path().join("bin").is_dir());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("x").unwrap();

        let r = relocate(td.path(), OsStr::new("a.txt"), "txt", true).unwrap();
        assert_eq!(r.dest, td.path().join("txt").join("a.txt"));
        assert!(!td.path().join("txt").exists());
        assert!(td.path().join("a.txt").exists());
    }

    #[test]
    fn dry_run_reports_a_blocked_label_like_a_real_run() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("a.txt").write_str("x").unwrap();
        td.child("txt").write_str("a plain file named like the label").unwrap();

        let planned = relocate(td.path(), OsStr::new("a.txt"), "txt", true).unwrap_err();
        let real = relocate(td.path(), OsStr::new("a.txt"), "txt", false).unwrap_err();
        assert_eq!(planned.kind(), "ensure_dir_failed");
        assert_eq!(planned.kind(), real.kind());
        assert!(td.path().join("txt").is_file());
        assert!(td.path().join("a.txt").exists());
    }
}
