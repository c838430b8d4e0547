//! Test utilities for the assembler.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use weaver_ir::Ecosystem;

use crate::{
    identifiers::DerivedEntity,
    naming::NamingConvention,
    renderer::{
        EcosystemRenderer, GenerationStamp, ProjectLayout, RenderContext, RendererRegistry,
    },
    tree::RenderedFile,
};

/// A fixed stamp for reproducible output.
pub fn stamp() -> GenerationStamp {
    GenerationStamp::new("2024-05-01 12:00:00")
}

const STUB_NAMING: NamingConvention = NamingConvention {
    language: "stub",
    keywords: &["class", "def"],
    framework_names: &["Router", "statusRoutes"],
    model_members: &["metadata"],
};

/// A minimal renderer emitting one line per identifier it references.
///
/// Flask and Express layouts use separable routes, FastAPI inlines them.
pub struct StubRenderer {
    ecosystem: Ecosystem,
}

impl StubRenderer {
    pub const fn new(ecosystem: Ecosystem) -> Self {
        Self { ecosystem }
    }
}

impl EcosystemRenderer for StubRenderer {
    fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    fn layout(&self) -> ProjectLayout {
        ProjectLayout {
            entrypoint: "entry.stub",
            manifest: "manifest.stub",
            extension: "stub",
            separable_routes: !matches!(self.ecosystem, Ecosystem::FastApi),
            default_port: 8080,
        }
    }

    fn naming(&self) -> NamingConvention {
        STUB_NAMING
    }

    fn entrypoint_bindings(&self, entity: &DerivedEntity) -> Vec<String> {
        vec![
            entity.ids.type_name().to_string(),
            format!("{}Routes", entity.ids.file_stem()),
        ]
    }

    fn render_entrypoint(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        let mut content = format!("# {}\n", ctx.stamp);
        for entity in entities {
            content.push_str(&format!(
                "import {} from models/{}\nmount {}\n",
                entity.ids.type_name(),
                entity.ids.file_stem(),
                entity.ids.collection_path()
            ));
        }
        RenderedFile::new(self.layout().entrypoint, content)
    }

    fn render_model(&self, entity: &DerivedEntity, _ctx: &RenderContext) -> RenderedFile {
        let mut content = format!("model {}\nid\n", entity.ids.type_name());
        for column in &entity.columns {
            content.push_str(&column.name);
            content.push('\n');
        }
        content.push_str("createdAt\nupdatedAt\n");
        RenderedFile::new(self.layout().model_path(&entity.ids), content)
    }

    fn render_routes(&self, entity: &DerivedEntity, _ctx: &RenderContext) -> Option<RenderedFile> {
        let path = self.layout().routes_path(&entity.ids)?;
        Some(RenderedFile::new(
            path,
            format!("routes {}\n", entity.ids.route_segment()),
        ))
    }

    fn render_manifest(&self, ctx: &RenderContext) -> RenderedFile {
        RenderedFile::new(
            self.layout().manifest,
            format!("driver {}\nauth {}\n", ctx.database(), ctx.include_auth()),
        )
    }

    fn render_docs(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile {
        let names: Vec<&str> = entities.iter().map(|e| e.ids.raw()).collect();
        RenderedFile::new(
            ProjectLayout::README,
            format!("# {}\n{}\n", ctx.ecosystem.label(), names.join(", ")),
        )
    }
}

static FLASK: StubRenderer = StubRenderer::new(Ecosystem::Flask);
static FASTAPI: StubRenderer = StubRenderer::new(Ecosystem::FastApi);
static EXPRESS: StubRenderer = StubRenderer::new(Ecosystem::Express);

/// Registry returning a [`StubRenderer`] for every ecosystem.
pub struct StubRegistry;

impl RendererRegistry for StubRegistry {
    fn renderer(&self, ecosystem: Ecosystem) -> &dyn EcosystemRenderer {
        match ecosystem {
            Ecosystem::Flask => &FLASK,
            Ecosystem::FastApi => &FASTAPI,
            Ecosystem::Express => &EXPRESS,
        }
    }
}
