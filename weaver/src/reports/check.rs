//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One entity as the generator will name it.
#[derive(Debug)]
pub struct EntitySummary {
    pub raw: String,
    pub type_name: String,
    pub collection_path: String,
    pub field_count: usize,
}

/// Report data from validating and deriving a manifest.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Target label, e.g. "FastAPI".
    pub target: String,
    pub database: String,
    pub include_auth: bool,
    pub entities: Vec<EntitySummary>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.info(info);
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();

        out.key_value_indented("target", &self.target);
        out.key_value_indented("database", &self.database);
        out.key_value_indented("auth", if self.include_auth { "jwt" } else { "none" });
        out.newline();

        out.section(&format!("Entities ({})", self.entities.len()));
        for entity in &self.entities {
            let fields = match entity.field_count {
                1 => "1 field".to_string(),
                n => format!("{} fields", n),
            };
            out.list_item(&format!(
                "{} → {} at {} ({})",
                entity.raw, entity.type_name, entity.collection_path, fields
            ));
        }
    }
}
