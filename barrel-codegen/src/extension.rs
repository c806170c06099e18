//! Supported barrel file extensions.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Extension of the generated index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extension {
    Js,
    #[default]
    Ts,
}

impl Extension {
    /// All supported extensions.
    pub const ALL: [Extension; 2] = [Extension::Js, Extension::Ts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }

    /// File name of the barrel for this extension (e.g. `index.ts`).
    pub fn index_file_name(&self) -> String {
        format!("index.{}", self.as_str())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported extension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported extension '{0}'")]
pub struct ParseExtensionError(pub String);

impl FromStr for Extension {
    type Err = ParseExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.as_str() == s)
            .ok_or_else(|| ParseExtensionError(s.to_string()))
    }
}
