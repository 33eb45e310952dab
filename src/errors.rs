//! Typed error definitions for downloads_sorter.
//! A closed set of failure modes: two configuration errors and a listing error
//! abort the run; ensure/rename errors are confined to a single entry.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("{var} is not set; point it at the downloads folder to organize")]
    ConfigMissing { var: &'static str },

    #[error("{var} does not name a usable directory '{}': {reason}", path.display())]
    ConfigInvalid {
        var: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("Could not read directory '{}'", path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not prepare destination directory '{}'", path.display())]
    EnsureDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not move '{}' -> '{}'", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Stable tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::ConfigMissing { .. } => "config_missing",
            SortError::ConfigInvalid { .. } => "config_invalid",
            SortError::ListingFailed { .. } => "listing_failed",
            SortError::EnsureDirFailed { .. } => "ensure_dir_failed",
            SortError::RenameFailed { .. } => "rename_failed",
        }
    }

    /// Fatal errors stop the whole run; the rest only fail one entry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SortError::ConfigMissing { .. }
                | SortError::ConfigInvalid { .. }
                | SortError::ListingFailed { .. }
        )
    }

    /// Underlying io error, when there is one.
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            SortError::ListingFailed { source, .. }
            | SortError::EnsureDirFailed { source, .. }
            | SortError::RenameFailed { source, .. } => Some(source),
            SortError::ConfigMissing { .. } | SortError::ConfigInvalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_split_matches_taxonomy() {
        let missing = SortError::ConfigMissing { var: "DOWNLOADS_PATH" };
        let rename = SortError::RenameFailed {
            from: PathBuf::from("/d/a.txt"),
            to: PathBuf::from("/d/txt/a.txt"),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        assert!(missing.is_fatal());
        assert!(!rename.is_fatal());
        assert_eq!(rename.kind(), "rename_failed");
        assert!(rename.io_source().is_some());
        assert!(missing.io_source().is_none());
    }

    #[test]
    fn messages_name_the_offending_path() {
        let e = SortError::EnsureDirFailed {
            path: PathBuf::from("/d/txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(e.to_string().contains("/d/txt"));

        let e = SortError::ConfigMissing { var: "DOWNLOADS_PATH" };
        assert!(e.to_string().contains("DOWNLOADS_PATH"));
    }
}
