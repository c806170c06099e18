//! Report data structures for operations.
//!
//! Operations build reports, then render them to an Output target.

mod generate;
mod output;

pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
