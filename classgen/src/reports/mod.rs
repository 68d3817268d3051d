//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod generate;
mod output;

pub use generate::{BatchFailure, ClassOutcome, GenerateReport, GeneratedClass};
pub use output::{Report, TerminalOutput};
