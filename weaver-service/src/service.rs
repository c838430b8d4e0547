//! The generation service.

use chrono::{DateTime, Utc};
use tracing::{info, info_span, warn};
use uuid::Uuid;
use weaver_codegen::{
    Result,
    pipeline::{Assembler, Assembly, CheckReport},
    renderer::{GenerationStamp, RendererRegistry},
};
use weaver_ir::GenerationRequest;

use crate::{
    archive::archive,
    artifact::{ArchiveBytes, Artifact, ArtifactHandle},
    config::ServiceConfig,
    store::{ArtifactStore, FsArtifactStore},
    targets::Targets,
};

/// Public entry point: validate, assemble, archive and persist.
///
/// Holds no per-request state, so one service can serve concurrent
/// requests. The store is the only shared resource.
///
/// # Example
///
/// ```ignore
/// let service = GenerationService::new(ServiceConfig::default());
/// let artifact = service.generate(&request)?;
/// println!("download from {}", artifact.handle.retrieval_path);
/// ```
pub struct GenerationService<S = FsArtifactStore, R = Targets> {
    store: S,
    registry: R,
    config: ServiceConfig,
}

impl GenerationService {
    /// A service over the built-in targets and a filesystem store at
    /// `config.store_root`.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            store: FsArtifactStore::new(config.store_root.clone()),
            registry: Targets,
            config,
        }
    }
}

impl<S: ArtifactStore, R: RendererRegistry> GenerationService<S, R> {
    pub fn with_parts(store: S, registry: R, config: ServiceConfig) -> Self {
        Self {
            store,
            registry,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate and persist a project, stamped with the current time.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Artifact> {
        self.generate_at(request, Utc::now())
    }

    /// Generate and persist a project with an explicit creation time.
    ///
    /// Nothing is persisted unless assembly and archiving both succeed.
    pub fn generate_at(
        &self,
        request: &GenerationRequest,
        created_at: DateTime<Utc>,
    ) -> Result<Artifact> {
        let span = info_span!("generate", target = %request.target);
        let _enter = span.enter();

        let assembly = self.preview(request, stamp_for(created_at))?;
        let bytes = archive(&assembly.tree)?;

        let id = Uuid::new_v4();
        let stored = self.store.persist(id, &assembly.tree, &bytes).inspect_err(|err| {
            warn!(artifact_id = %id, error = %err, "generation failed");
        })?;

        info!(
            artifact_id = %id,
            files = assembly.tree.len(),
            bytes = bytes.len(),
            "artifact persisted"
        );

        Ok(Artifact {
            id,
            ecosystem: assembly.ecosystem,
            tree_root: stored.tree_root,
            archive_path: stored.archive_path,
            created_at,
            files: assembly.tree.paths().map(str::to_string).collect(),
            archive_size: bytes.len() as u64,
            handle: ArtifactHandle::new(id, &self.config),
            diagnostics: assembly.diagnostics,
        })
    }

    /// Assemble the project tree without persisting anything.
    pub fn preview(&self, request: &GenerationRequest, stamp: GenerationStamp) -> Result<Assembly> {
        Assembler::new(&self.registry).assemble(request, stamp)
    }

    /// Run validation and identifier derivation only.
    pub fn check(&self, request: &GenerationRequest) -> Result<CheckReport> {
        Assembler::new(&self.registry).check(request)
    }

    /// Retrieve the archive of a stored artifact.
    pub fn fetch(&self, artifact_id: &str) -> Result<Option<ArchiveBytes>> {
        self.store.fetch(artifact_id)
    }
}

/// The stamp for a generation happening now.
pub fn stamp_now() -> GenerationStamp {
    stamp_for(Utc::now())
}

/// The stamp written into generated headers for `at`.
pub fn stamp_for(at: DateTime<Utc>) -> GenerationStamp {
    GenerationStamp::new(at.format(GenerationStamp::FORMAT).to_string())
}
