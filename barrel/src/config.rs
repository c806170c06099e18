use std::path::PathBuf;

use barrel_codegen::Mode;

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose entries are re-exported.
    pub directory: PathBuf,
    /// Barrel file to create or overwrite.
    pub output: PathBuf,
    pub mode: Mode,
    /// Render without writing.
    pub dry_run: bool,
    pub verbose: bool,
}
