//! Directory lister: immediate entries of the source directory.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::SortError;

/// One immediate entry of the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: OsString,
    /// From the entry's own type; a symlink to a directory is not a directory here.
    pub is_dir: bool,
}

/// List `source` once, sorted by name. Any read error fails the whole listing.
pub fn list_entries(source: &Path) -> Result<Vec<SourceEntry>, SortError> {
    let listing_failed = |source_err| SortError::ListingFailed {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(source).map_err(listing_failed)? {
        let item = item.map_err(listing_failed)?;
        let file_type = item.file_type().map_err(listing_failed)?;
        entries.push(SourceEntry {
            name: item.file_name(),
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(source = %source.display(), count = entries.len(), "Listed source directory");
    Ok(entries)
}
