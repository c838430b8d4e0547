//! Artifact storage.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use uuid::Uuid;
use weaver_codegen::{GenerationError, Result, tree::ProjectTree};

use crate::artifact::{ArchiveBytes, StoredArtifact};

/// The artifact storage namespace.
///
/// Implementations must make `persist` all-or-nothing: either the tree and
/// archive both become visible under `id`, or neither does.
pub trait ArtifactStore: Send + Sync {
    /// Store a finished tree and its archive under a fresh id.
    fn persist(&self, id: Uuid, tree: &ProjectTree, archive: &[u8]) -> Result<StoredArtifact>;

    /// Load the archive of a stored artifact.
    ///
    /// Unknown ids and ids that are not UUIDs yield `Ok(None)`.
    fn fetch(&self, id: &str) -> Result<Option<ArchiveBytes>>;
}

/// Filesystem-backed artifact store.
///
/// # Directory Structure
///
/// ```text
/// generated_apis/
/// ├── .staging/                 # in-progress writes, never served
/// ├── 550e8400-e29b-41d4-a716-446655440000/
/// │   ├── app.py
/// │   └── models/orders.py
/// └── 550e8400-e29b-41d4-a716-446655440000.zip
/// ```
///
/// Both parts are written under `.staging/{id}` first. The tree is moved
/// into place before the archive, so an archive on disk always has a
/// complete tree next to it.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    const STAGING: &'static str = ".staging";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tree_dir(&self, id: &Uuid) -> PathBuf {
        self.root.join(id.to_string())
    }

    fn archive_file(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.zip", id))
    }

    fn staging_dir(&self, id: &Uuid) -> PathBuf {
        self.root.join(Self::STAGING).join(id.to_string())
    }

    fn stage_and_publish(
        &self,
        id: &Uuid,
        staging: &Path,
        tree: &ProjectTree,
        archive: &[u8],
    ) -> io::Result<StoredArtifact> {
        let staged_tree = staging.join("tree");
        let staged_archive = staging.join("archive.zip");

        fs::create_dir_all(&staged_tree)?;
        tree.write_to(&staged_tree)?;
        fs::write(&staged_archive, archive)?;
        debug!(artifact_id = %id, staging = %staging.display(), "artifact staged");

        let tree_root = self.tree_dir(id);
        let archive_path = self.archive_file(id);
        if tree_root.exists() || archive_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("artifact {} already exists", id),
            ));
        }

        fs::rename(&staged_tree, &tree_root)?;
        if let Err(err) = fs::rename(&staged_archive, &archive_path) {
            discard(&tree_root);
            return Err(err);
        }

        Ok(StoredArtifact {
            tree_root,
            archive_path,
        })
    }
}

impl ArtifactStore for FsArtifactStore {
    fn persist(&self, id: Uuid, tree: &ProjectTree, archive: &[u8]) -> Result<StoredArtifact> {
        let staging = self.staging_dir(&id);
        let result = self.stage_and_publish(&id, &staging, tree, archive);
        discard(&staging);

        result.map_err(|e| {
            warn!(artifact_id = %id, error = %e, "artifact discarded");
            GenerationError::archive_io(format!("persisting artifact {}", id), e)
        })
    }

    fn fetch(&self, id: &str) -> Result<Option<ArchiveBytes>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        match fs::read(self.archive_file(&id)) {
            Ok(bytes) => Ok(Some(ArchiveBytes::new(bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GenerationError::archive_io(
                format!("reading artifact {}", id),
                e,
            )),
        }
    }
}

/// Best-effort removal of a directory that must not survive a failure.
fn discard(path: &Path) {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            warn!(path = %path.display(), error = %e, "failed to remove directory");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use weaver_codegen::ErrorKind;

    use super::*;

    fn tree() -> ProjectTree {
        let mut tree = ProjectTree::new();
        tree.insert("models/orders.js", "module.exports = {};\n").unwrap();
        tree.insert("app.js", "const app = {};\n").unwrap();
        tree
    }

    #[test]
    fn test_persist_then_fetch() {
        let dir = TempDir::new().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = Uuid::new_v4();

        let stored = store.persist(id, &tree(), b"zip bytes").unwrap();

        assert_eq!(stored.tree_root, dir.path().join(id.to_string()));
        assert!(stored.tree_root.join("models/orders.js").is_file());
        assert!(stored.tree_root.join("app.js").is_file());
        assert_eq!(fs::read(&stored.archive_path).unwrap(), b"zip bytes");

        let fetched = store.fetch(&id.to_string()).unwrap().unwrap();
        assert_eq!(fetched.bytes, b"zip bytes");
        assert_eq!(fetched.content_length, 9);
    }

    #[test]
    fn test_staging_is_cleaned_up() {
        let dir = TempDir::new().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = Uuid::new_v4();

        store.persist(id, &tree(), b"zip").unwrap();
        assert!(!store.staging_dir(&id).exists());
    }

    #[test]
    fn test_fetch_unknown_or_malformed_id() {
        let dir = TempDir::new().unwrap();
        let store = FsArtifactStore::new(dir.path());

        assert!(store.fetch(&Uuid::new_v4().to_string()).unwrap().is_none());
        assert!(store.fetch("not-a-uuid").unwrap().is_none());
        assert!(store.fetch("../etc/passwd").unwrap().is_none());
    }

    #[test]
    fn test_existing_id_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = Uuid::new_v4();

        store.persist(id, &tree(), b"first").unwrap();
        let err = store.persist(id, &tree(), b"second").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArchiveIo);
        assert_eq!(store.fetch(&id.to_string()).unwrap().unwrap().bytes, b"first");
        assert!(!store.staging_dir(&id).exists());
    }

    #[test]
    fn test_unwritable_root_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("store");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let store = FsArtifactStore::new(&blocker);
        let id = Uuid::new_v4();
        let err = store.persist(id, &tree(), b"zip").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArchiveIo);
        assert!(blocker.is_file());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
