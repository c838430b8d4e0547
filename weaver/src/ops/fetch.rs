//! Fetch operation - copy a stored archive out of the store.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};
use tracing::debug;
use weaver_service::{GenerationService, ServiceConfig};

use crate::reports::FetchReport;

/// Execute the fetch operation.
///
/// Writes the archive to `output`, or `{id}.zip` in the current directory.
pub fn fetch(store: &Path, artifact_id: &str, output: Option<&Path>) -> Result<FetchReport> {
    let service = GenerationService::new(ServiceConfig::default().with_store_root(store));

    let Some(archive) = service.fetch(artifact_id)? else {
        bail!("no artifact '{}' in {}", artifact_id, store.display());
    };

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{}.zip", artifact_id)));
    debug!(artifact_id, bytes = archive.content_length, "writing archive");
    std::fs::write(&output, &archive.bytes)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    Ok(FetchReport {
        artifact_id: artifact_id.to_string(),
        output,
        content_length: archive.content_length,
    })
}
