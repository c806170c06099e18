//! Directory listing.
//!
//! Listing goes through [`EntrySource`] so callers can swap the real
//! filesystem for an in-memory fixture.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Source of directory entries.
pub trait EntrySource {
    /// List the names of the immediate entries of `dir`.
    ///
    /// Files and subdirectories are both returned. The order is whatever the
    /// source yields; no sorting is applied.
    fn list_entries(&self, dir: &Path) -> Result<Vec<String>>;
}

impl<T: EntrySource + ?Sized> EntrySource for &T {
    fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list_entries(dir)
    }
}

/// Lists entries from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsEntries;

impl EntrySource for FsEntries {
    fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| Error::read_dir(dir, e))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| Error::read_dir(dir, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        tracing::debug!(dir = %dir.display(), count = names.len(), "listed directory");
        Ok(names)
    }
}

/// In-memory directory listing.
///
/// Entries are returned in insertion order, which makes the generator's
/// output fully deterministic in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntries {
    dirs: HashMap<PathBuf, Vec<String>>,
}

impl MemoryEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory with the given entries.
    pub fn dir<I, S>(mut self, path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs
            .insert(path.into(), entries.into_iter().map(Into::into).collect());
        self
    }
}

impl EntrySource for MemoryEntries {
    fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        self.dirs.get(dir).cloned().ok_or_else(|| {
            Error::read_dir(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            )
        })
    }
}
