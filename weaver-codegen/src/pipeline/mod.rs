//! Assembly pipeline.
//!
//! The [`Assembler`] drives one request through the stages
//! `Validating → Deriving → Rendering → Finalizing`. The pipeline provides:
//!
//! - Explicit stage boundaries with a [`Stage`] state machine
//! - Unified diagnostics collection
//! - A per-request [`AssemblyContext`] holding every intermediate result
//!
//! # Example
//!
//! ```ignore
//! use weaver_codegen::pipeline::Assembler;
//!
//! let assembly = Assembler::new(&registry).assemble(&request, stamp)?;
//!
//! for diag in &assembly.diagnostics {
//!     if diag.severity.is_warning() {
//!         eprintln!("warning: {}", diag.message);
//!     }
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;
mod stage;

pub use context::AssemblyContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::{Assembler, Assembly, CheckReport};
pub use stage::Stage;
