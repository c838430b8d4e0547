//! Persisted generation results.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use weaver_codegen::pipeline::Diagnostic;
use weaver_ir::Ecosystem;

use crate::config::{ServiceConfig, join_path};

/// Retrieval locations of an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactHandle {
    pub artifact_id: Uuid,
    /// Where the archive can be downloaded (`/api/download/{id}`).
    pub retrieval_path: String,
    /// Where the generated API docs are served (`/api/swagger/{id}`).
    pub docs_path: String,
}

impl ArtifactHandle {
    pub fn new(id: Uuid, config: &ServiceConfig) -> Self {
        let id_str = id.to_string();
        Self {
            artifact_id: id,
            retrieval_path: join_path(&config.download_prefix, &id_str),
            docs_path: join_path(&config.docs_prefix, &id_str),
        }
    }
}

/// Locations written by an [`ArtifactStore`](crate::ArtifactStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    pub tree_root: PathBuf,
    pub archive_path: PathBuf,
}

/// One successful generation: the persisted tree and its archive.
///
/// Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub id: Uuid,
    pub ecosystem: Ecosystem,
    pub tree_root: PathBuf,
    pub archive_path: PathBuf,
    pub created_at: DateTime<Utc>,
    /// Relative paths of the archived files, in archive order.
    pub files: Vec<String>,
    pub archive_size: u64,
    pub handle: ArtifactHandle,
    /// Warnings raised while assembling the tree.
    pub diagnostics: Vec<Diagnostic>,
}

/// Archive contents returned by the retrieval boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBytes {
    pub bytes: Vec<u8>,
    pub content_length: u64,
}

impl ArchiveBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        let content_length = bytes.len() as u64;
        Self {
            bytes,
            content_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_paths() {
        let id = Uuid::nil();
        let handle = ArtifactHandle::new(id, &ServiceConfig::default());

        assert_eq!(
            handle.retrieval_path,
            "/api/download/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            handle.docs_path,
            "/api/swagger/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_handle_uses_configured_prefix() {
        let config = ServiceConfig::default().with_download_prefix("/files/");
        let handle = ArtifactHandle::new(Uuid::nil(), &config);
        assert!(handle.retrieval_path.starts_with("/files/0000"));
    }

    #[test]
    fn test_content_length() {
        let archive = ArchiveBytes::new(vec![0; 42]);
        assert_eq!(archive.content_length, 42);
    }
}
