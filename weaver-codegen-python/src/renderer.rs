//! Flask and FastAPI implementations of [`EcosystemRenderer`].

use weaver_codegen::{
    docs::{DocsProfile, render_readme},
    endpoints::CrudOperation,
    identifiers::DerivedEntity,
    naming::NamingConvention,
    renderer::{EcosystemRenderer, ProjectLayout, RenderContext},
    tree::RenderedFile,
};
use weaver_ir::Ecosystem;

use crate::{
    files::{FastApiMainPy, FlaskAppPy, FlaskRoutesPy, ModelPy, RequirementsTxt},
    naming::PYTHON_NAMING,
};

const FLASK_LAYOUT: ProjectLayout = ProjectLayout {
    entrypoint: "app.py",
    manifest: "requirements.txt",
    extension: "py",
    separable_routes: true,
    default_port: 5000,
};

const FASTAPI_LAYOUT: ProjectLayout = ProjectLayout {
    entrypoint: "main.py",
    manifest: "requirements.txt",
    extension: "py",
    separable_routes: false,
    default_port: 8000,
};

const FLASK_DOCS: DocsProfile = DocsProfile {
    install: "pip install -r requirements.txt",
    run: "python app.py",
    secret_var: "JWT_SECRET_KEY",
    interactive_docs: None,
};

const FASTAPI_DOCS: DocsProfile = DocsProfile {
    install: "pip install -r requirements.txt",
    run: "python main.py",
    secret_var: "JWT_SECRET_KEY",
    interactive_docs: Some("/docs"),
};

/// Renders Flask projects: `app.py`, a blueprint module per entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlaskRenderer;

impl EcosystemRenderer for FlaskRenderer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Flask
    }

    fn layout(&self) -> ProjectLayout {
        FLASK_LAYOUT
    }

    fn naming(&self) -> NamingConvention {
        PYTHON_NAMING
    }

    fn entrypoint_bindings(&self, entity: &DerivedEntity) -> Vec<String> {
        vec![
            entity.ids.type_name().to_string(),
            FlaskRoutesPy::blueprint_var(entity),
        ]
    }

    fn render_entrypoint(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&FlaskAppPy::new(entities, ctx, FLASK_LAYOUT.default_port))
    }

    fn render_model(&self, entity: &DerivedEntity, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&ModelPy::new(entity, ctx.database(), FLASK_LAYOUT))
    }

    fn render_routes(&self, entity: &DerivedEntity, _ctx: &RenderContext) -> Option<RenderedFile> {
        Some(RenderedFile::from_generated(&FlaskRoutesPy::new(
            entity,
            FLASK_LAYOUT,
        )))
    }

    fn render_manifest(&self, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&RequirementsTxt::new(ctx))
    }

    fn render_docs(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::new(
            ProjectLayout::README,
            render_readme(&FLASK_DOCS, &FLASK_LAYOUT, entities, ctx),
        )
    }
}

/// Renders FastAPI projects: `main.py` with inline routes, pydantic payloads
/// in the model modules.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastApiRenderer;

impl EcosystemRenderer for FastApiRenderer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::FastApi
    }

    fn layout(&self) -> ProjectLayout {
        FASTAPI_LAYOUT
    }

    fn naming(&self) -> NamingConvention {
        PYTHON_NAMING
    }

    fn entrypoint_bindings(&self, entity: &DerivedEntity) -> Vec<String> {
        let mut names = vec![entity.ids.type_name().to_string()];
        names.extend(CrudOperation::ALL.iter().map(|op| FastApiMainPy::handler_name(entity, *op)));
        names
    }

    fn render_entrypoint(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&FastApiMainPy::new(
            entities,
            ctx,
            FASTAPI_LAYOUT.default_port,
        ))
    }

    fn render_model(&self, entity: &DerivedEntity, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(
            &ModelPy::new(entity, ctx.database(), FASTAPI_LAYOUT).with_payload(true),
        )
    }

    fn render_routes(&self, _entity: &DerivedEntity, _ctx: &RenderContext) -> Option<RenderedFile> {
        None
    }

    fn render_manifest(&self, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&RequirementsTxt::new(ctx))
    }

    fn render_docs(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::new(
            ProjectLayout::README,
            render_readme(&FASTAPI_DOCS, &FASTAPI_LAYOUT, entities, ctx),
        )
    }
}
