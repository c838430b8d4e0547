//! Check operation - validation and identifier derivation.

use weaver_codegen::{Result, pipeline::Severity};
use weaver_ir::Ecosystem;
use weaver_manifest::WeaverToml;
use weaver_service::GenerationService;

use super::{generate::build_request, messages, service_config};
use crate::reports::{CheckReport, EntitySummary};

/// Execute the check operation.
///
/// Runs the validating and deriving stages and reports how every entity
/// will be named. Nothing is rendered or written.
pub fn check(file: &WeaverToml, target: Option<Ecosystem>) -> Result<CheckReport> {
    let service = GenerationService::new(service_config(file, None));
    let report = service.check(&build_request(file, target))?;

    let entities = report
        .entities
        .iter()
        .map(|entity| EntitySummary {
            raw: entity.name().to_string(),
            type_name: entity.ids.type_name().to_string(),
            collection_path: entity.ids.collection_path(),
            field_count: entity.columns.len(),
        })
        .collect();

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        target: report.request.ecosystem.label().to_string(),
        database: report.request.database.to_string(),
        include_auth: report.request.include_auth,
        entities,
        warnings: messages(&report.diagnostics, Severity::Warning),
        infos: messages(&report.diagnostics, Severity::Info),
    })
}
