//! Service configuration.

use std::path::PathBuf;

const DEFAULT_STORE_ROOT: &str = "generated_apis";
const DEFAULT_DOWNLOAD_PREFIX: &str = "/api/download";
const DEFAULT_DOCS_PREFIX: &str = "/api/swagger";

/// Where artifacts are stored and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Directory artifacts are persisted under.
    pub store_root: PathBuf,
    /// Prefix of the archive retrieval path.
    pub download_prefix: String,
    /// Prefix of the API documentation path.
    pub docs_prefix: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(DEFAULT_STORE_ROOT),
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            docs_prefix: DEFAULT_DOCS_PREFIX.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn with_store_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.store_root = root.into();
        self
    }

    pub fn with_download_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.download_prefix = prefix.into();
        self
    }

    pub fn with_docs_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.docs_prefix = prefix.into();
        self
    }
}

/// Join a prefix and an id with exactly one slash.
pub(crate) fn join_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), id)
}
