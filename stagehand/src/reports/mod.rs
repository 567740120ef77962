//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod init;
mod output;
mod plan;

pub use build::{BuildReport, StepLine};
pub use check::CheckReport;
pub use init::InitReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use plan::PlanReport;
