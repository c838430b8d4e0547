//! Per-ecosystem rendering abstraction.
//!
//! Each target ecosystem provides one [`EcosystemRenderer`]. The assembler
//! obtains it through a [`RendererRegistry`], so this crate stays free of
//! any concrete target.

use std::fmt;

use weaver_core::DatabaseKind;
use weaver_ir::Ecosystem;

use crate::{
    identifiers::{DerivedEntity, IdentifierBundle},
    naming::NamingConvention,
    tree::RenderedFile,
};

/// The generation timestamp recorded in file headers.
///
/// This is the only value allowed to differ between two runs of the same
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationStamp(String);

impl GenerationStamp {
    /// `strftime`-style format used for stamps (`2024-05-01 12:00:00`).
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenerationStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request options that change dependencies and wiring, but never the file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsedExtras {
    pub database: DatabaseKind,
    pub auth: bool,
}

/// Everything a renderer needs besides the entities themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub ecosystem: Ecosystem,
    pub extras: UsedExtras,
    pub stamp: GenerationStamp,
}

impl RenderContext {
    pub fn database(&self) -> DatabaseKind {
        self.extras.database
    }

    pub fn include_auth(&self) -> bool {
        self.extras.auth
    }
}

/// Fixed file layout of an ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLayout {
    pub entrypoint: &'static str,
    pub manifest: &'static str,
    pub extension: &'static str,
    /// Whether routes live in their own module per entity.
    pub separable_routes: bool,
    pub default_port: u16,
}

impl ProjectLayout {
    pub const README: &'static str = "README.md";

    /// `models/{FileStem}.{ext}`
    pub fn model_path(&self, ids: &IdentifierBundle) -> String {
        format!("models/{}.{}", ids.file_stem(), self.extension)
    }

    /// `routes/{FileStem}Routes.{ext}`, for ecosystems with separable routing.
    pub fn routes_path(&self, ids: &IdentifierBundle) -> Option<String> {
        self.separable_routes
            .then(|| format!("routes/{}Routes.{}", ids.file_stem(), self.extension))
    }

    /// Number of files a complete tree holds for `entities` entities.
    pub fn expected_file_count(&self, entities: usize) -> usize {
        let per_entity = if self.separable_routes { 2 } else { 1 };
        per_entity * entities + 3
    }
}

/// Renders the files of one target ecosystem.
///
/// All methods are pure functions of their inputs. Identifiers must be taken
/// from the [`DerivedEntity`] bundles, never recomputed from raw names.
pub trait EcosystemRenderer: Send + Sync {
    fn ecosystem(&self) -> Ecosystem;

    fn layout(&self) -> ProjectLayout;

    /// Keywords and framework names entities and fields must avoid.
    fn naming(&self) -> NamingConvention;

    /// Names the entrypoint binds at top level on behalf of `entity`.
    ///
    /// These share one namespace across all entities, so the deriving stage
    /// rejects a request where two entities would bind the same name.
    fn entrypoint_bindings(&self, entity: &DerivedEntity) -> Vec<String>;

    /// Application bootstrap wiring every entity, plus `/` and `/health`.
    fn render_entrypoint(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile;

    /// Persistent record definition with surrogate id and audit timestamps.
    fn render_model(&self, entity: &DerivedEntity, ctx: &RenderContext) -> RenderedFile;

    /// The five CRUD routes, or `None` when routing is inlined in the entrypoint.
    fn render_routes(&self, entity: &DerivedEntity, ctx: &RenderContext) -> Option<RenderedFile>;

    /// Dependency declaration, driven by `ctx.extras`.
    fn render_manifest(&self, ctx: &RenderContext) -> RenderedFile;

    /// Usage instructions enumerating every endpoint.
    fn render_docs(&self, entities: &[DerivedEntity], ctx: &RenderContext) -> RenderedFile;
}

/// Resolves the renderer for an ecosystem.
pub trait RendererRegistry: Send + Sync {
    fn renderer(&self, ecosystem: Ecosystem) -> &dyn EcosystemRenderer;
}
