//! Barrel collection and rendering.

use std::path::{Path, PathBuf};

use barrel_core::{EntrySource, File};

use crate::{Mode, ReExport};

/// An ordered set of re-exports forming one barrel file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Barrel {
    exports: Vec<ReExport>,
}

impl Barrel {
    /// Build a barrel from entry names, keeping their order.
    pub fn from_entries<I, S>(entries: I, mode: Mode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exports = entries
            .into_iter()
            .filter_map(|entry| {
                let entry = entry.as_ref();
                if mode.includes(entry) {
                    Some(ReExport::from_entry(entry))
                } else {
                    tracing::debug!(entry, "skipping index entry");
                    None
                }
            })
            .collect();

        Self { exports }
    }

    /// List `dir` through `source` and build a barrel from its entries.
    pub fn collect(
        source: &impl EntrySource,
        dir: &Path,
        mode: Mode,
    ) -> barrel_core::Result<Self> {
        let entries = source.list_entries(dir)?;
        Ok(Self::from_entries(entries, mode))
    }

    /// The re-exports, in listing order.
    pub fn exports(&self) -> &[ReExport] {
        &self.exports
    }

    /// Number of re-exported modules.
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Render the barrel: one statement per line, no trailing newline.
    pub fn render(&self) -> String {
        self.exports
            .iter()
            .map(ReExport::build)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Turn the barrel into a file at `path`.
    pub fn into_file(self, path: impl Into<PathBuf>) -> File {
        File::new(path, self.render())
    }
}
