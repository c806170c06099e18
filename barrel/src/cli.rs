use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use barrel_codegen::{Extension, Mode};
use clap::Parser;

use crate::{config::Config, error::UsageError};

#[derive(Parser, Debug)]
#[command(name = "barrel")]
#[command(version)]
#[command(about = "Create a barrel file re-exporting every module in a directory")]
pub(crate) struct Cli {
    /// Directory whose entries are re-exported
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Output file (defaults to <directory>/index.<extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extension of the generated index file: js or ts (defaults to ts)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Re-export every entry, index files included (requires --output)
    #[arg(long)]
    pub plain: bool,

    /// Preview the barrel without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the raw arguments and resolve defaults.
    pub fn into_config(self) -> Result<Config, UsageError> {
        let directory = self.directory.ok_or(UsageError::MissingDirectory)?;

        let mode = if self.plain {
            if self.extension.is_some() {
                return Err(UsageError::ExtensionInPlainMode);
            }
            Mode::Plain
        } else {
            let extension = match self.extension {
                Some(value) => value
                    .parse::<Extension>()
                    .map_err(|e| UsageError::InvalidExtension { value: e.0 })?,
                None => Extension::default(),
            };
            Mode::Indexed(extension)
        };

        let output = match (self.output, mode.extension()) {
            (Some(output), _) => output,
            (None, Some(extension)) => default_output(&directory, extension),
            (None, None) => return Err(UsageError::MissingOutput),
        };

        Ok(Config {
            directory,
            output,
            mode,
            dry_run: self.dry_run,
            verbose: self.verbose,
        })
    }
}

/// `<directory>/index.<ext>`, joined textually so the path prints as typed.
fn default_output(directory: &Path, extension: Extension) -> PathBuf {
    let mut output = OsString::from(directory.as_os_str());
    output.push("/");
    output.push(extension.index_file_name());
    PathBuf::from(output)
}

/// Parse command-line arguments (including the program name) into a config.
///
/// Performs no I/O and never exits the process.
pub fn parse_args<I, T>(argv: I) -> Result<Config, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv)?.into_config()
}
