//! Core operations.
//!
//! This module contains the business logic for weaver commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod fetch;
pub mod generate;
pub mod targets;

use std::path::Path;

pub use check::check;
pub use fetch::fetch;
pub use generate::{GenerateOptions, generate};
pub use targets::targets;
use tracing::debug;
use weaver_codegen::pipeline::{Diagnostic, Severity};
use weaver_manifest::WeaverToml;
use weaver_service::ServiceConfig;

/// Resolve the service configuration for a manifest.
///
/// `--store` wins over `[service] store`; a relative store from the
/// manifest resolves against the manifest's directory.
pub fn service_config(file: &WeaverToml, store_override: Option<&Path>) -> ServiceConfig {
    let service = &file.manifest().service;
    let mut config = ServiceConfig::default();

    config = match (store_override, &service.store) {
        (Some(store), _) => config.with_store_root(store),
        (None, Some(store)) => config.with_store_root(file.base_dir().join(store)),
        (None, None) => {
            let root = file.base_dir().join(&config.store_root);
            config.with_store_root(root)
        }
    };

    if let Some(prefix) = &service.download_prefix {
        config = config.with_download_prefix(prefix);
    }
    debug!(store = %config.store_root.display(), "resolved artifact store");
    config
}

/// Format diagnostics of one severity, with their location when present.
pub(crate) fn messages(diagnostics: &[Diagnostic], severity: Severity) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.severity == severity)
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect()
}
