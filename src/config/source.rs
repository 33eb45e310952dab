//! Source directory resolution.
//! Reads DOWNLOADS_PATH and checks that it names an existing directory
//! before anything on disk is touched.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use super::SOURCE_DIR_ENV;
use crate::errors::SortError;

/// Resolve the source directory from the process environment.
pub fn source_dir_from_env() -> Result<PathBuf, SortError> {
    resolve_source_dir(env::var_os(SOURCE_DIR_ENV))
}

/// Validate a raw configured value. Unset and empty are both "missing".
///
/// The returned path is canonical so every destination computed from it is
/// anchored to the same real directory.
pub fn resolve_source_dir(raw: Option<OsString>) -> Result<PathBuf, SortError> {
    let raw = match raw {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => return Err(SortError::ConfigMissing { var: SOURCE_DIR_ENV }),
    };

    let invalid = |reason: String| SortError::ConfigInvalid {
        var: SOURCE_DIR_ENV,
        path: raw.clone(),
        reason,
    };

    let meta = match fs::metadata(&raw) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(invalid("path does not exist".into()));
        }
        Err(e) => return Err(invalid(format!("cannot determine whether it exists: {e}"))),
    };
    if !meta.is_dir() {
        return Err(invalid("not a directory".into()));
    }

    let resolved = dunce::canonicalize(&raw)
        .map_err(|e| invalid(format!("cannot resolve path: {e}")))?;
    debug!(source = %resolved.display(), "Resolved source directory");
    Ok(resolved)
}
