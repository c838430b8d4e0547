//! Targets operation - list what can be generated.

use weaver_codegen::renderer::RendererRegistry;
use weaver_core::DatabaseKind;
use weaver_ir::Ecosystem;
use weaver_service::Targets;

use crate::reports::{TargetInfo, TargetsReport};

/// Execute the targets operation.
pub fn targets() -> TargetsReport {
    let targets = Ecosystem::ALL
        .iter()
        .map(|&ecosystem| {
            let layout = Targets.renderer(ecosystem).layout();
            TargetInfo {
                name: ecosystem.as_str(),
                label: ecosystem.label(),
                entrypoint: layout.entrypoint,
                manifest: layout.manifest,
                separable_routes: layout.separable_routes,
                default_port: layout.default_port,
            }
        })
        .collect();

    let databases = [DatabaseKind::Mysql, DatabaseKind::Mongodb]
        .into_iter()
        .map(|db| {
            let description = if db.is_relational() {
                "relational (SQLAlchemy / Sequelize)"
            } else {
                "document (PyMongo / Mongoose)"
            };
            (db.as_str(), description)
        })
        .collect();

    TargetsReport { targets, databases }
}
