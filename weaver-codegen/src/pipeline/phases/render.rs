//! Rendering stage: renders every file into a fresh project tree.

use tracing::trace;

use crate::{
    error::{GenerationError, Result},
    pipeline::{AssemblyContext, Phase, Stage},
    renderer::ProjectLayout,
    tree::{ProjectTree, RenderedFile},
};

/// Phase that renders models and routes per entity, then the entrypoint,
/// manifest and README.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn stage(&self) -> Stage {
        Stage::Rendering
    }

    fn description(&self) -> &'static str {
        "Render models, routes, entrypoint, manifest and docs"
    }

    fn run(&self, ctx: &mut AssemblyContext<'_>) -> Result<()> {
        let renderer = ctx.renderer()?;
        let render_ctx = ctx.render_context()?;
        let layout = renderer.layout();
        let entities = ctx.derived()?;
        let mut tree = ProjectTree::new();

        // Per-entity files come first so the entrypoint is rendered from the
        // same bundles the models and routes used.
        for entity in entities {
            let model = renderer.render_model(entity, &render_ctx);
            place(&mut tree, model, &layout.model_path(&entity.ids))?;

            match (
                renderer.render_routes(entity, &render_ctx),
                layout.routes_path(&entity.ids),
            ) {
                (Some(routes), Some(expected)) => place(&mut tree, routes, &expected)?,
                (None, None) => {}
                (Some(routes), None) => {
                    return Err(GenerationError::render(format!(
                        "inline-routing renderer produced route module '{}'",
                        routes.path
                    )));
                }
                (None, Some(expected)) => {
                    return Err(GenerationError::render(format!(
                        "renderer produced no route module '{}'",
                        expected
                    )));
                }
            }
        }

        let entrypoint = renderer.render_entrypoint(entities, &render_ctx);
        place(&mut tree, entrypoint, layout.entrypoint)?;

        let manifest = renderer.render_manifest(&render_ctx);
        place(&mut tree, manifest, layout.manifest)?;

        let docs = renderer.render_docs(entities, &render_ctx);
        place(&mut tree, docs, ProjectLayout::README)?;

        ctx.tree = Some(tree);
        Ok(())
    }
}

/// Insert `file`, checking it landed where the layout says it must.
fn place(tree: &mut ProjectTree, file: RenderedFile, expected: &str) -> Result<()> {
    if file.path != expected {
        return Err(GenerationError::render(format!(
            "renderer produced '{}' where '{}' was expected",
            file.path, expected
        )));
    }
    trace!(path = %file.path, bytes = file.content.len(), "rendered file");
    tree.insert_file(file)
}
