use miette::Diagnostic;
use thiserror::Error;

/// Problems with the command line. Nothing is read or written when one occurs.
#[derive(Debug, Error, Diagnostic)]
pub enum UsageError {
    #[error("missing -d / --directory parameter")]
    #[diagnostic(
        code(barrel::missing_directory),
        help("pass the directory to index, e.g. 'barrel -d src/components'")
    )]
    MissingDirectory,

    #[error("missing -o / --output parameter")]
    #[diagnostic(
        code(barrel::missing_output),
        help("plain mode has no default output, pass one with -o")
    )]
    MissingOutput,

    #[error("invalid -e / --extension flag (only \"js\" and \"ts\" supported)")]
    #[diagnostic(code(barrel::invalid_extension), help("got '{value}'"))]
    InvalidExtension { value: String },

    #[error("-e / --extension cannot be used with --plain")]
    #[diagnostic(
        code(barrel::extension_in_plain_mode),
        help("plain mode writes to the path given with -o and has no extension")
    )]
    ExtensionInPlainMode,

    #[error("{0}")]
    Arguments(#[from] clap::Error),
}

/// Extension trait for exiting on usage errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for Result<T, UsageError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            // clap reports --help and --version through errors as well
            Err(UsageError::Arguments(e)) => {
                let code = if e.use_stderr() { 1 } else { 0 };
                let _ = e.print();
                std::process::exit(code);
            }
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}
