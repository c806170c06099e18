//! Re-export statement builder.

use std::fmt;

use barrel_core::strip_extension;

/// A wildcard re-export of a sibling module: `export * from './name'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExport {
    module: String,
}

impl ReExport {
    /// Re-export the module with the given (already stripped) name.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// Re-export the module backing a directory entry.
    pub fn from_entry(entry: &str) -> Self {
        Self::new(strip_extension(entry))
    }

    /// Name of the re-exported module, without extension.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Relative module specifier (`./name`).
    pub fn specifier(&self) -> String {
        format!("./{}", self.module)
    }

    /// Build the statement as a string.
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export * from '{}'", self.specifier())
    }
}
