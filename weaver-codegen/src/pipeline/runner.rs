//! Pipeline orchestrator.

use tracing::{debug, info_span, warn};
use weaver_ir::{Ecosystem, GenerationRequest, ValidatedRequest};

use super::{
    AssemblyContext, Diagnostic, Phase, Stage,
    phases::{DerivePhase, FinalizePhase, RenderPhase, ValidatePhase},
};
use crate::{
    error::{GenerationError, Result},
    identifiers::DerivedEntity,
    renderer::{GenerationStamp, RendererRegistry},
    tree::ProjectTree,
};

/// The result of a complete assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub ecosystem: Ecosystem,
    pub entities: Vec<DerivedEntity>,
    pub tree: ProjectTree,
    pub diagnostics: Vec<Diagnostic>,
}

/// The result of a validating and deriving run, without rendering.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub request: ValidatedRequest,
    pub entities: Vec<DerivedEntity>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The project assembler.
///
/// Runs the built-in phases in stage order against a fresh
/// [`AssemblyContext`]. Any phase error moves the run to
/// [`Stage::Failed`] and aborts it; no partial tree is returned.
///
/// # Example
///
/// ```ignore
/// let assembler = Assembler::new(&registry);
/// let assembly = assembler.assemble(&request, GenerationStamp::new("2024-05-01 12:00:00"))?;
///
/// for (path, _) in assembly.tree.iter() {
///     println!("{path}");
/// }
/// ```
pub struct Assembler<'r> {
    registry: &'r dyn RendererRegistry,
}

impl<'r> Assembler<'r> {
    pub fn new(registry: &'r dyn RendererRegistry) -> Self {
        Self { registry }
    }

    /// Run every stage and return the finished project tree.
    pub fn assemble(&self, request: &GenerationRequest, stamp: GenerationStamp) -> Result<Assembly> {
        let span = info_span!(
            "assemble",
            target = %request.target,
            entities = request.entities.len()
        );
        let _enter = span.enter();

        let mut ctx = AssemblyContext::new(request, self.registry, stamp);
        self.run(
            &mut ctx,
            &[&ValidatePhase, &DerivePhase, &RenderPhase, &FinalizePhase],
        )?;

        let missing = |what: &str| GenerationError::render(format!("{} missing after done", what));
        Ok(Assembly {
            ecosystem: ctx.validated()?.ecosystem,
            entities: ctx.derived.take().ok_or_else(|| missing("entities"))?,
            tree: ctx.tree.take().ok_or_else(|| missing("project tree"))?,
            diagnostics: ctx.diagnostics,
        })
    }

    /// Run the validating and deriving stages only.
    pub fn check(&self, request: &GenerationRequest) -> Result<CheckReport> {
        let span = info_span!("check", target = %request.target);
        let _enter = span.enter();

        let mut ctx = AssemblyContext::new(request, self.registry, GenerationStamp::new(""));
        self.run(&mut ctx, &[&ValidatePhase, &DerivePhase])?;

        let missing = |what: &str| GenerationError::render(format!("{} missing after check", what));
        Ok(CheckReport {
            request: ctx.validated.take().ok_or_else(|| missing("request"))?,
            entities: ctx.derived.take().ok_or_else(|| missing("entities"))?,
            diagnostics: ctx.diagnostics,
        })
    }

    /// Phases must be given in stage order, starting at validation.
    fn run(&self, ctx: &mut AssemblyContext<'_>, phases: &[&dyn Phase]) -> Result<()> {
        let mut expected = Stage::Validating;

        for phase in phases {
            if phase.stage() != expected {
                ctx.stage = Stage::Failed;
                return Err(GenerationError::render(format!(
                    "{} phase scheduled while {}",
                    phase.stage(),
                    expected
                )));
            }
            let seen = ctx.diagnostics.len();
            ctx.stage = expected;
            debug!(stage = %ctx.stage, "{}", phase.description());

            if let Err(err) = phase.run(ctx) {
                warn!(stage = %ctx.stage, error = %err, "assembly failed");
                ctx.stage = Stage::Failed;
                return Err(err);
            }

            for diagnostic in &ctx.diagnostics[seen..] {
                if diagnostic.severity.is_warning() {
                    warn!(stage = %diagnostic.stage, "{}", diagnostic);
                } else {
                    debug!(stage = %diagnostic.stage, "{}", diagnostic);
                }
            }
            expected = expected.next();
        }

        ctx.stage = Stage::Done;
        debug!("assembly complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use weaver_core::DatabaseKind;
    use weaver_ir::{Field, SchemaEntity};

    use super::*;
    use crate::{
        error::ErrorKind,
        testing::{StubRegistry, stamp},
    };

    fn orders() -> SchemaEntity {
        SchemaEntity::new("orders").with_field(Field::new("total", "number"))
    }

    #[test]
    fn test_assemble_separable_routes() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(Ecosystem::Flask, DatabaseKind::Mysql, vec![orders()]);

        let assembly = Assembler::new(&registry).assemble(&request, stamp()).unwrap();

        let paths: Vec<_> = assembly.tree.paths().collect();
        assert_eq!(
            paths,
            [
                "models/orders.stub",
                "routes/ordersRoutes.stub",
                "entry.stub",
                "manifest.stub",
                "README.md"
            ]
        );
        assert_eq!(assembly.ecosystem, Ecosystem::Flask);
    }

    #[test]
    fn test_assemble_inline_routes() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(
            Ecosystem::FastApi,
            DatabaseKind::Mongodb,
            vec![orders(), SchemaEntity::new("users")],
        );

        let assembly = Assembler::new(&registry).assemble(&request, stamp()).unwrap();
        assert_eq!(assembly.tree.len(), 2 + 3);
        assert!(assembly.diagnostics.iter().any(|d| d.severity.is_warning()));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(Ecosystem::Express, DatabaseKind::Mysql, vec![orders()]);
        let assembler = Assembler::new(&registry);

        let first = assembler.assemble(&request, stamp()).unwrap();
        let second = assembler.assemble(&request, stamp()).unwrap();
        assert_eq!(first.tree, second.tree);
    }

    #[test]
    fn test_failed_request_returns_no_tree() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(Ecosystem::Flask, DatabaseKind::Mysql, vec![]);

        let err = Assembler::new(&registry).assemble(&request, stamp()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_check_skips_rendering() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(Ecosystem::Flask, DatabaseKind::Mysql, vec![orders()]);

        let report = Assembler::new(&registry).check(&request).unwrap();
        assert_eq!(report.entities.len(), 1);
        assert_eq!(report.request.database, DatabaseKind::Mysql);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_phases_out_of_stage_order_are_refused() {
        let registry = StubRegistry;
        let request = GenerationRequest::new(Ecosystem::Flask, DatabaseKind::Mysql, vec![orders()]);
        let assembler = Assembler::new(&registry);

        let mut ctx = AssemblyContext::new(&request, &registry, stamp());
        let err = assembler
            .run(&mut ctx, &[&ValidatePhase, &RenderPhase])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Render);
        assert!(err.to_string().contains("rendering phase scheduled while deriving"));
        assert_eq!(ctx.stage, Stage::Failed);
        assert!(ctx.tree.is_none());
    }
}
