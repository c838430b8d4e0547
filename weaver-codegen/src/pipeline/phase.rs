//! Pipeline phase trait.

use super::{AssemblyContext, Stage};
use crate::error::Result;

/// A phase of the assembly pipeline.
///
/// Phases run in stage order. Each phase reads what earlier phases stored in
/// the [`AssemblyContext`] and adds its own results. Non-fatal findings are
/// recorded as diagnostics; fatal ones abort the run with an error.
///
/// Built-in phases:
/// - `ValidatePhase` - resolves target and database, checks names
/// - `DerivePhase` - computes identifier bundles and rejects collisions
/// - `RenderPhase` - renders every file into the project tree
/// - `FinalizePhase` - checks the tree is complete
pub trait Phase: Send + Sync {
    /// The stage this phase implements.
    fn stage(&self) -> Stage;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the assembly context.
    fn run(&self, ctx: &mut AssemblyContext<'_>) -> Result<()>;
}
