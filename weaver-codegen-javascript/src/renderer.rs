//! Express implementation of [`EcosystemRenderer`].

use weaver_codegen::{
    docs::{DocsProfile, render_readme},
    identifiers::DerivedEntity,
    naming::NamingConvention,
    renderer::{EcosystemRenderer, ProjectLayout, RenderContext},
    tree::RenderedFile,
};
use weaver_ir::Ecosystem;

use crate::{
    files::{AppJs, JWT_SECRET_VAR, ModelJs, PackageJson, RoutesJs},
    naming::JS_NAMING,
};

const EXPRESS_LAYOUT: ProjectLayout = ProjectLayout {
    entrypoint: "app.js",
    manifest: "package.json",
    extension: "js",
    separable_routes: true,
    default_port: 3000,
};

const EXPRESS_DOCS: DocsProfile = DocsProfile {
    install: "npm install",
    run: "npm start",
    secret_var: JWT_SECRET_VAR,
    interactive_docs: None,
};

/// Renders Express projects: `app.js`, a model and a router factory per entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressRenderer;

impl EcosystemRenderer for ExpressRenderer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Express
    }

    fn layout(&self) -> ProjectLayout {
        EXPRESS_LAYOUT
    }

    fn naming(&self) -> NamingConvention {
        JS_NAMING
    }

    fn entrypoint_bindings(&self, entity: &DerivedEntity) -> Vec<String> {
        vec![
            entity.ids.type_name().to_string(),
            RoutesJs::factory_var(entity),
        ]
    }

    fn render_entrypoint(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&AppJs::new(entities, ctx, EXPRESS_LAYOUT.default_port))
    }

    fn render_model(&self, entity: &DerivedEntity, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&ModelJs::new(entity, ctx.database(), EXPRESS_LAYOUT))
    }

    fn render_routes(&self, entity: &DerivedEntity, _ctx: &RenderContext) -> Option<RenderedFile> {
        Some(RenderedFile::from_generated(&RoutesJs::new(
            entity,
            EXPRESS_LAYOUT,
        )))
    }

    fn render_manifest(&self, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::from_generated(&PackageJson::new(ctx))
    }

    fn render_docs(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        RenderedFile::new(
            ProjectLayout::README,
            render_readme(&EXPRESS_DOCS, &EXPRESS_LAYOUT, entities, ctx),
        )
    }
}
