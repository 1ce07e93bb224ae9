//! Report data structures for commands.
//!
//! This module separates data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;

pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
