//! Manifest types for weaver.toml files.

use std::{collections::HashSet, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use weaver_core::DatabaseKind;
use weaver_ir::{Ecosystem, GenerationRequest, SchemaEntity};

use crate::{Result, SourceContext, validate::ParseContext};

pub(crate) const DEFAULT_FILENAME: &str = "weaver.toml";

const TARGETS: &str = "flask, fastapi, express";
const DATABASES: &str = "mysql, mongodb";

/// Root manifest for weaver.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectConfig,

    #[serde(default)]
    pub service: ServiceSection,

    /// Tables or collections to scaffold, in generation order.
    #[serde(default)]
    pub entities: Vec<SchemaEntity>,
}

/// `[project]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub target: String,
    pub database: String,
    #[serde(default)]
    pub include_auth: bool,
}

/// `[service]`, all keys optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    /// Directory artifacts are persisted under.
    pub store: Option<PathBuf>,
    /// URL prefix of the archive retrieval endpoint.
    pub download_prefix: Option<String>,
}

impl FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a weaver.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let manifest: Self = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.validate(&source)?;
        Ok(manifest)
    }

    /// The configured target.
    ///
    /// Only `None` for manifests built by hand; parsed manifests are validated.
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        self.project.target.parse().ok()
    }

    /// The configured database.
    pub fn database(&self) -> Option<DatabaseKind> {
        self.project.database.parse().ok()
    }

    /// Build the generation request described by this manifest.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            target: self.project.target.clone(),
            database: self.project.database.clone(),
            entities: self.entities.clone(),
            include_auth: self.project.include_auth,
        }
    }

    /// Validate the manifest after parsing
    fn validate(&self, source: &SourceContext) -> Result<()> {
        let ctx = ParseContext::new(source);

        let target = &self.project.target;
        if target.parse::<Ecosystem>().is_err() {
            return Err(source.unsupported_value_error(
                "target",
                target,
                TARGETS,
                ctx.find_span("target", target),
            ));
        }

        let database = &self.project.database;
        if database.parse::<DatabaseKind>().is_err() {
            return Err(source.unsupported_value_error(
                "database",
                database,
                DATABASES,
                ctx.find_span("database", database),
            ));
        }

        let relative_prefix = self
            .service
            .download_prefix
            .as_ref()
            .filter(|prefix| !prefix.starts_with('/'));
        if let Some(prefix) = relative_prefix {
            return Err(source.validation_error_at(
                "download_prefix must start with '/'",
                ctx.find_span("download_prefix", prefix),
            ));
        }

        for entity in &self.entities {
            ctx.validate_name(&entity.name, "entity")?;

            let entity_ctx = ctx.push(&entity.name);
            let mut seen = HashSet::new();
            for field in &entity.fields {
                entity_ctx.validate_name(&field.name, "field")?;
                if !seen.insert(field.name.as_str()) {
                    return Err(source.validation_error_at(
                        format!("duplicate field '{}' in '{}'", field.name, entity.name),
                        ctx.find_span("name", &field.name),
                    ));
                }
            }
        }

        Ok(())
    }
}
