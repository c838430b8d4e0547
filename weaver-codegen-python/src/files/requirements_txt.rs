//! requirements.txt generator for Python projects.

use weaver_codegen::{
    imports::{DependencyCollector, DependencySpec},
    renderer::RenderContext,
};
use weaver_core::{DatabaseKind, GeneratedFile};
use weaver_ir::Ecosystem;

/// The pinned dependency list of a generated Flask or FastAPI project.
pub struct RequirementsTxt<'a> {
    pub ctx: &'a RenderContext,
}

impl<'a> RequirementsTxt<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    /// Collect dependencies: framework first, then database driver, then auth.
    pub fn dependencies(&self) -> DependencyCollector {
        let mut deps = DependencyCollector::new();

        match self.ctx.ecosystem {
            Ecosystem::FastApi => {
                deps.add_simple("fastapi", "0.104.1");
                deps.add_simple("uvicorn", "0.24.0");
                deps.add_simple("pydantic", "2.5.0");
            }
            _ => {
                deps.add_simple("Flask", "2.3.3");
                deps.add_simple("Flask-Cors", "4.0.0");
                deps.add_simple("gunicorn", "21.2.0");
            }
        }

        match self.ctx.database() {
            DatabaseKind::Mysql => {
                deps.add_simple("SQLAlchemy", "2.0.21");
                deps.add_simple("PyMySQL", "1.1.0");
            }
            DatabaseKind::Mongodb => deps.add_simple("pymongo", "4.5.0"),
        }

        if self.ctx.include_auth() {
            match self.ctx.ecosystem {
                Ecosystem::FastApi => deps.add(
                    "python-jose",
                    DependencySpec::new("3.3.0").with_features(["cryptography"]),
                ),
                _ => deps.add_simple("Flask-JWT-Extended", "4.5.3"),
            }
        }

        deps
    }
}

impl GeneratedFile for RequirementsTxt<'_> {
    fn path(&self) -> String {
        "requirements.txt".to_string()
    }

    fn render(&self) -> String {
        let mut out = format!("# Generated by API Weaver on {}\n", self.ctx.stamp);
        for (name, spec) in self.dependencies().iter() {
            if spec.features.is_empty() {
                out.push_str(&format!("{}=={}\n", name, spec.version));
            } else {
                out.push_str(&format!(
                    "{}[{}]=={}\n",
                    name,
                    spec.features.join(","),
                    spec.version
                ));
            }
        }
        out
    }
}
