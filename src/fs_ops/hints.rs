//! Actionable hints for io errors.
//!
//! `SortError` already names the path involved; these helpers turn the
//! underlying io error into a short diagnosis for the failure report:
//!
//!   error!(reason = %describe_io_error(e), "Could not move file");

use std::io;

/// Platform-aware hint for an io error, if one applies.
pub fn io_hint(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        return os_hint(code);
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been moved or deleted during the run"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove or rename the existing entry"),
        _ => None,
    }
}

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "cross-filesystem; atomic rename not possible",
        libc::EBUSY => "resource busy; ensure no other process is using it",
        libc::ENOENT => "path not found; it may have been moved or deleted during the run",
        libc::EEXIST => "already exists; remove or rename the existing entry",
        libc::ENOTDIR => "a path component is not a directory",
        libc::EISDIR => "destination is a directory",
        libc::ENOSPC => "insufficient space on device",
        libc::EROFS => "read-only filesystem; cannot write here",
        libc::ENAMETOOLONG => "filename or path too long",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",        // ERROR_ACCESS_DENIED
        17 => "not same device; cross-filesystem move", // ERROR_NOT_SAME_DEVICE
        32 => "sharing violation; file is in use",      // ERROR_SHARING_VIOLATION
        2 | 3 => "path not found; it may have been moved or deleted during the run",
        80 | 183 => "already exists; remove or rename the existing entry",
        19 => "write protected / read-only media", // ERROR_WRITE_PROTECT
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

/// The io error text plus hint and OS code, for log lines.
pub fn describe_io_error(e: &io::Error) -> String {
    let mut msg = e.to_string();
    if let Some(hint) = io_hint(e) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}
