//! Assembly context passed through pipeline phases.

use weaver_ir::{GenerationRequest, ValidatedRequest};

use super::{Diagnostic, Stage};
use crate::{
    error::{GenerationError, Result},
    identifiers::DerivedEntity,
    renderer::{EcosystemRenderer, GenerationStamp, RenderContext, RendererRegistry, UsedExtras},
    tree::ProjectTree,
};

/// State of one assembly run.
///
/// Each request gets its own context; nothing in it is shared between runs.
pub struct AssemblyContext<'a> {
    /// The request as received.
    pub request: &'a GenerationRequest,
    registry: &'a dyn RendererRegistry,
    /// Timestamp recorded in generated headers.
    pub stamp: GenerationStamp,
    /// Current state of the run.
    pub stage: Stage,
    /// Populated by the validating stage.
    pub validated: Option<ValidatedRequest>,
    /// Populated by the deriving stage.
    pub derived: Option<Vec<DerivedEntity>>,
    /// Populated by the rendering stage.
    pub tree: Option<ProjectTree>,
    /// Non-fatal findings collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(
        request: &'a GenerationRequest,
        registry: &'a dyn RendererRegistry,
        stamp: GenerationStamp,
    ) -> Self {
        Self {
            request,
            registry,
            stamp,
            stage: Stage::Validating,
            validated: None,
            derived: None,
            tree: None,
            diagnostics: Vec::new(),
        }
    }

    /// The validated request.
    pub fn validated(&self) -> Result<&ValidatedRequest> {
        self.validated
            .as_ref()
            .ok_or_else(|| out_of_order("validated request", self.stage))
    }

    /// The derived entities, in request order.
    pub fn derived(&self) -> Result<&[DerivedEntity]> {
        self.derived
            .as_deref()
            .ok_or_else(|| out_of_order("derived identifiers", self.stage))
    }

    /// The renderer for the validated ecosystem.
    pub fn renderer(&self) -> Result<&'a dyn EcosystemRenderer> {
        let ecosystem = self.validated()?.ecosystem;
        let renderer = self.registry.renderer(ecosystem);
        if renderer.ecosystem() != ecosystem {
            return Err(GenerationError::render(format!(
                "registry returned the {} renderer for {}",
                renderer.ecosystem(),
                ecosystem
            )));
        }
        Ok(renderer)
    }

    /// Render options for the validated request.
    pub fn render_context(&self) -> Result<RenderContext> {
        let validated = self.validated()?;
        Ok(RenderContext {
            ecosystem: validated.ecosystem,
            extras: UsedExtras {
                database: validated.database,
                auth: validated.include_auth,
            },
            stamp: self.stamp.clone(),
        })
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

fn out_of_order(what: &str, stage: Stage) -> GenerationError {
    GenerationError::render(format!("{} not available during {}", what, stage))
}
