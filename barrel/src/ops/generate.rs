//! Generate operation - write a barrel file for a directory.

use std::path::Path;

use barrel_codegen::{Barrel, Mode};
use barrel_core::EntrySource;
use eyre::{Context, Result};

use crate::{config::Config, reports::GenerateReport};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory whose entries are re-exported.
    pub directory: &'a Path,
    /// Barrel file to write.
    pub output: &'a Path,
    pub mode: Mode,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

impl<'a> From<&'a Config> for GenerateOptions<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            directory: &config.directory,
            output: &config.output,
            mode: config.mode,
            dry_run: config.dry_run,
        }
    }
}

/// Execute the generate operation.
///
/// Lists the directory through `source`, renders the barrel and writes it
/// unless this is a dry run.
pub fn generate(source: &impl EntrySource, opts: GenerateOptions) -> Result<GenerateReport> {
    let barrel = Barrel::collect(source, opts.directory, opts.mode)
        .wrap_err_with(|| format!("Failed to list '{}'", opts.directory.display()))?;
    let count = barrel.len();
    let file = barrel.into_file(opts.output);

    if opts.dry_run {
        tracing::debug!(output = %opts.output.display(), count, "dry run, skipping write");
        return Ok(GenerateReport {
            output: opts.output.to_path_buf(),
            count,
            preview: Some(file.content().to_string()),
        });
    }

    file.write().wrap_err("Failed to write barrel file")?;
    tracing::info!(output = %opts.output.display(), count, "barrel written");

    Ok(GenerateReport {
        output: opts.output.to_path_buf(),
        count,
        preview: None,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use barrel_codegen::Extension;
    use barrel_core::MemoryEntries;
    use tempfile::TempDir;

    use super::*;

    fn options<'a>(output: &'a Path, mode: Mode, dry_run: bool) -> GenerateOptions<'a> {
        GenerateOptions {
            directory: Path::new("src"),
            output,
            mode,
            dry_run,
        }
    }

    #[test]
    fn test_generate_indexed() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("index.ts");
        let source = MemoryEntries::new().dir("src", ["a.ts", "b.ts", "index.ts"]);

        let report = generate(
            &source,
            options(&output, Mode::Indexed(Extension::Ts), false),
        )
        .unwrap();

        assert_eq!(report.count, 2);
        assert_eq!(report.output, output);
        assert!(report.preview.is_none());
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "export * from './a'\nexport * from './b'"
        );
    }

    #[test]
    fn test_generate_plain() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("all.ts");
        let source = MemoryEntries::new().dir("src", ["a.js", "b.ts", "index.ts"]);

        let report = generate(&source, options(&output, Mode::Plain, false)).unwrap();

        assert_eq!(report.count, 3);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "export * from './a'\nexport * from './b'\nexport * from './index'"
        );
    }

    #[test]
    fn test_generate_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("index.ts");
        let source = MemoryEntries::new().dir("src", ["a.ts"]);

        let report = generate(&source, options(&output, Mode::default(), true)).unwrap();

        assert_eq!(report.count, 1);
        assert_eq!(report.preview.as_deref(), Some("export * from './a'"));
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_missing_directory() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("index.ts");
        let source = MemoryEntries::new();

        let err = generate(&source, options(&output, Mode::default(), false)).unwrap_err();

        assert_eq!(err.to_string(), "Failed to list 'src'");
        assert!(err.downcast_ref::<Box<barrel_core::Error>>().is_some());
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_unwritable_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("index.ts");
        let source = MemoryEntries::new().dir("src", ["a.ts"]);

        let err = generate(&source, options(&output, Mode::default(), false)).unwrap_err();

        assert_eq!(err.to_string(), "Failed to write barrel file");
    }

    #[test]
    fn test_generate_from_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            directory: "src".into(),
            output: temp.path().join("index.js"),
            mode: Mode::Indexed(Extension::Js),
            dry_run: false,
            verbose: false,
        };
        let source = MemoryEntries::new().dir("src", ["a.js", "index.js"]);

        let report = generate(&source, GenerateOptions::from(&config)).unwrap();

        assert_eq!(report.count, 1);
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "export * from './a'"
        );
    }
}
