//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod fetch;
mod generate;
mod output;
mod targets;

pub use check::{CheckReport, EntitySummary};
pub use fetch::FetchReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, StoredResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use targets::{TargetInfo, TargetsReport};
