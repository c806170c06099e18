use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating or truncating it.
    ///
    /// The parent directory must already exist.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| Error::write(&self.path, e))?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote file"
        );
        Ok(())
    }
}
