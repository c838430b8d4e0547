//! package.json generator for Express projects.

use weaver_codegen::{imports::DependencyCollector, renderer::RenderContext};
use weaver_core::{DatabaseKind, GeneratedFile};

const DEFAULT_NAME: &str = "generated-api";
const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_DESCRIPTION: &str = "Generated API by API Weaver";

/// The package.json manifest.
pub struct PackageJson<'a> {
    pub ctx: &'a RenderContext,
    pub name: String,
    pub version: String,
    pub description: String,
}

impl<'a> PackageJson<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self {
            ctx,
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Runtime dependencies: framework first, then data layer, then auth.
    pub fn dependencies(&self) -> DependencyCollector {
        let mut deps = DependencyCollector::new();
        deps.add_simple("express", "^4.18.2");
        deps.add_simple("cors", "^2.8.5");
        deps.add_simple("dotenv", "^16.3.1");

        match self.ctx.database() {
            DatabaseKind::Mongodb => deps.add_simple("mongoose", "^7.5.0"),
            DatabaseKind::Mysql => {
                deps.add_simple("sequelize", "^6.33.0");
                deps.add_simple("mysql2", "^3.6.1");
            }
        }

        if self.ctx.include_auth() {
            deps.add_simple("jsonwebtoken", "^9.0.2");
        }
        deps
    }

    pub fn dev_dependencies(&self) -> DependencyCollector {
        let mut deps = DependencyCollector::new();
        deps.add_simple("nodemon", "^3.0.1");
        deps
    }

    fn render_dependencies(deps: &DependencyCollector) -> String {
        deps.iter()
            .map(|(name, spec)| format!("    \"{}\": \"{}\"", name, spec.version))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl GeneratedFile for PackageJson<'_> {
    fn path(&self) -> String {
        "package.json".to_string()
    }

    fn render(&self) -> String {
        let dependencies = Self::render_dependencies(&self.dependencies());
        let dev_dependencies = Self::render_dependencies(&self.dev_dependencies());

        format!(
            r#"{{
  "name": "{}",
  "version": "{}",
  "description": "{}",
  "main": "app.js",
  "scripts": {{
    "start": "node app.js",
    "dev": "nodemon app.js"
  }},
  "dependencies": {{
{}
  }},
  "devDependencies": {{
{}
  }}
}}
"#,
            self.name, self.version, self.description, dependencies, dev_dependencies
        )
    }
}
