//! Filesystem operations: one file per step of a relocation.

mod atomic;
mod classify;
mod ensure;
mod hints;
mod listing;
mod relocate;

pub use classify::{NO_EXTENSION_LABEL, extension_label};
pub use ensure::{EnsuredDir, ensure_label_dir};
pub use hints::{describe_io_error, io_hint};
pub use listing::{SourceEntry, list_entries};
pub use relocate::{Relocation, relocate};
