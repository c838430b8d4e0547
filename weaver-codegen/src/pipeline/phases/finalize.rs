//! Finalizing stage: checks the project tree is complete.

use crate::{
    error::{GenerationError, Result},
    pipeline::{AssemblyContext, Diagnostic, Phase, Stage},
};

/// Phase that checks the rendered tree holds exactly the expected files.
pub struct FinalizePhase;

impl Phase for FinalizePhase {
    fn stage(&self) -> Stage {
        Stage::Finalizing
    }

    fn description(&self) -> &'static str {
        "Check the project tree is complete"
    }

    fn run(&self, ctx: &mut AssemblyContext<'_>) -> Result<()> {
        let layout = ctx.renderer()?.layout();
        let entity_count = ctx.derived()?.len();
        let tree = ctx
            .tree
            .as_ref()
            .ok_or_else(|| GenerationError::render("project tree not available during finalizing"))?;

        let expected = layout.expected_file_count(entity_count);
        if tree.len() != expected {
            return Err(GenerationError::render(format!(
                "project tree holds {} files, expected {} for {} entities",
                tree.len(),
                expected,
                entity_count
            )));
        }

        let summary = format!(
            "{} files, {} bytes for {} entities",
            tree.len(),
            tree.total_bytes(),
            entity_count
        );
        ctx.add_diagnostic(Diagnostic::info(Stage::Finalizing.as_str(), summary));
        Ok(())
    }
}
