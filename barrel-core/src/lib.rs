//! Core filesystem capabilities for the barrel generator.
//!
//! This crate provides directory listing behind a swappable trait, the
//! single file write the generator performs, and the name utilities shared
//! by the rest of the workspace.

mod entries;
mod error;
mod file;
mod naming;

// Directory listing
pub use entries::{EntrySource, FsEntries, MemoryEntries};
pub use error::{Error, Result};
// File operations
pub use file::File;
// Name utilities
pub use naming::{is_index, strip_extension};
