//! The request boundary.

use serde::Serialize;
use weaver_codegen::{ErrorKind, GenerationError};

use crate::Artifact;

/// What a caller receives for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResponse {
    Success {
        artifact_id: String,
        download_url: String,
        docs_url: String,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
}

impl GenerationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResponse::Success { .. })
    }
}

/// Turn a generation outcome into its boundary value.
pub fn respond(result: Result<Artifact, GenerationError>) -> GenerationResponse {
    match result {
        Ok(artifact) => GenerationResponse::Success {
            artifact_id: artifact.id.to_string(),
            download_url: artifact.handle.retrieval_path,
            docs_url: artifact.handle.docs_path,
        },
        Err(err) => GenerationResponse::Error {
            kind: err.kind(),
            message: err.to_string(),
        },
    }
}
