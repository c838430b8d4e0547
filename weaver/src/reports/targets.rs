//! Targets command report data structures.

use super::output::{Output, Report};

/// One supported target ecosystem.
#[derive(Debug)]
pub struct TargetInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub entrypoint: &'static str,
    pub manifest: &'static str,
    pub separable_routes: bool,
    pub default_port: u16,
}

/// Report data listing what `weaver generate` can produce.
#[derive(Debug)]
pub struct TargetsReport {
    pub targets: Vec<TargetInfo>,
    /// Database kinds with a short description.
    pub databases: Vec<(&'static str, &'static str)>,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Targets");
        for target in &self.targets {
            let routing = if target.separable_routes {
                "routes/ modules"
            } else {
                "inline routes"
            };
            out.list_item(&format!(
                "{:<8} {} ({} + {}, {}, port {})",
                target.name,
                target.label,
                target.entrypoint,
                target.manifest,
                routing,
                target.default_port
            ));
        }
        out.newline();

        out.section("Databases");
        for (name, description) in &self.databases {
            out.list_item(&format!("{:<8} {}", name, description));
        }
    }
}
