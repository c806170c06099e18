use barrel_core::is_index;

use crate::Extension;

/// How entries are selected for the barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Skip existing index entries; the default output is `index.<ext>`.
    Indexed(Extension),
    /// Include every entry; the output path must be given explicitly.
    Plain,
}

impl Mode {
    /// Whether an entry name should be re-exported in this mode.
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::Indexed(_) => !is_index(name),
            Self::Plain => true,
        }
    }

    /// The extension of the index file, if this mode has one.
    pub fn extension(&self) -> Option<Extension> {
        match self {
            Self::Indexed(ext) => Some(*ext),
            Self::Plain => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Indexed(Extension::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_skips_index_entries() {
        let mode = Mode::Indexed(Extension::Ts);
        assert!(mode.includes("a.ts"));
        assert!(!mode.includes("index.ts"));
        assert!(!mode.includes("index.js"));
        assert!(!mode.includes("index"));
    }

    #[test]
    fn test_plain_includes_everything() {
        assert!(Mode::Plain.includes("a.ts"));
        assert!(Mode::Plain.includes("index.ts"));
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(Mode::default(), Mode::Indexed(Extension::Ts));
        assert_eq!(Mode::default().extension(), Some(Extension::Ts));
        assert_eq!(Mode::Plain.extension(), None);
    }
}
