//! The built-in target registry.

use weaver_codegen::renderer::{EcosystemRenderer, RendererRegistry};
use weaver_codegen_javascript::ExpressRenderer;
use weaver_codegen_python::{FastApiRenderer, FlaskRenderer};
use weaver_ir::Ecosystem;

/// Maps every [`Ecosystem`] to its renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Targets;

impl RendererRegistry for Targets {
    fn renderer(&self, ecosystem: Ecosystem) -> &dyn EcosystemRenderer {
        match ecosystem {
            Ecosystem::Flask => &FlaskRenderer,
            Ecosystem::FastApi => &FastApiRenderer,
            Ecosystem::Express => &ExpressRenderer,
        }
    }
}
