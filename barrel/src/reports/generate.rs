//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from generating a barrel file.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the barrel file.
    pub output: PathBuf,
    /// Number of re-exported modules.
    pub count: usize,
    /// Rendered content, set only for dry runs.
    pub preview: Option<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let output = self.output.display();

        match &self.preview {
            Some(content) => {
                out.divider(&output.to_string());
                out.preformatted(content);
                out.status(&format!(
                    "[DRY RUN] would export {} files to {}",
                    self.count, output
                ));
            }
            None => {
                out.status(&format!("[OK] exported {} files from {}", self.count, output));
            }
        }
    }
}
