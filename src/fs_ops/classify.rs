//! Extension classifier: filename -> destination subfolder name.

use std::ffi::OsStr;

/// Label used for names without a usable extension.
pub const NO_EXTENSION_LABEL: &str = "no-extensions";

/// Bytes after the last `.`, or [`NO_EXTENSION_LABEL`] when there is none.
///
/// `archive.tar.gz` gives `gz` and `.bashrc` gives `bashrc`. A trailing dot
/// (`notes.`) leaves an empty suffix, which counts as no extension. Case is
/// kept as-is, and names that are not valid UTF-8 keep their raw suffix.
pub fn extension_label(file_name: &OsStr) -> &OsStr {
    let bytes = file_name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) if dot + 1 < bytes.len() => {
            // SAFETY: the slice starts right after an ASCII `.`, which is a
            // valid split point in the platform encoding, and runs to the end.
            unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[dot + 1..]) }
        }
        _ => OsStr::new(NO_EXTENSION_LABEL),
    }
}
