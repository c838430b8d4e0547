//! Generate operation - assemble, archive and persist a project.

use std::path::Path;

use weaver_codegen::{Result, pipeline::Severity};
use weaver_ir::{Ecosystem, GenerationRequest};
use weaver_manifest::WeaverToml;
use weaver_service::{Artifact, GenerationService, stamp_now};

use super::{messages, service_config};
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, StoredResult};

/// Options for the generate operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateOptions<'a> {
    /// Target override; the manifest's `[project] target` otherwise.
    pub target: Option<Ecosystem>,
    /// Store root override; `[service] store` otherwise.
    pub store: Option<&'a Path>,
    /// Assemble only, persist nothing.
    pub dry_run: bool,
}

/// Build the request a manifest describes, with an optional target override.
pub fn build_request(file: &WeaverToml, target: Option<Ecosystem>) -> GenerationRequest {
    let mut request = file.manifest().to_request();
    if let Some(ecosystem) = target {
        request.target = ecosystem.as_str().to_string();
    }
    request
}

/// Generate and persist, returning the artifact as the service produced it.
///
/// Used for `--json`, where the response is shaped at the boundary.
pub fn generate_artifact(file: &WeaverToml, opts: GenerateOptions<'_>) -> Result<Artifact> {
    let service = GenerationService::new(service_config(file, opts.store));
    service.generate(&build_request(file, opts.target))
}

/// Execute the generate operation.
pub fn generate(file: &WeaverToml, opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let service = GenerationService::new(service_config(file, opts.store));
    let request = build_request(file, opts.target);

    if opts.dry_run {
        let assembly = service.preview(&request, stamp_now())?;
        let files = assembly
            .tree
            .iter()
            .map(|(path, bytes)| PreviewFile {
                path: path.to_string(),
                content: String::from_utf8_lossy(bytes).into_owned(),
            })
            .collect();

        return Ok(GenerateReport {
            target: assembly.ecosystem.label().to_string(),
            warnings: messages(&assembly.diagnostics, Severity::Warning),
            result: GenerationResult::Preview(PreviewResult { files }),
        });
    }

    let artifact = service.generate(&request)?;

    Ok(GenerateReport {
        target: artifact.ecosystem.label().to_string(),
        warnings: messages(&artifact.diagnostics, Severity::Warning),
        result: GenerationResult::Stored(StoredResult {
            artifact_id: artifact.id.to_string(),
            tree_root: artifact.tree_root,
            archive_path: artifact.archive_path,
            archive_size: artifact.archive_size,
            download_path: artifact.handle.retrieval_path,
            docs_path: artifact.handle.docs_path,
            files: artifact.files,
        }),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use weaver_codegen::ErrorKind;
    use weaver_core::DatabaseKind;

    use super::*;

    fn starter(dir: &TempDir, ecosystem: Ecosystem) -> WeaverToml {
        WeaverToml::create(
            dir.path().join("weaver.toml"),
            ecosystem,
            DatabaseKind::Mysql,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_persists_under_manifest_store() {
        let dir = TempDir::new().unwrap();
        let file = starter(&dir, Ecosystem::Flask);

        let report = generate(&file, GenerateOptions::default()).unwrap();
        assert_eq!(report.target, "Flask");

        let GenerationResult::Stored(stored) = report.result else {
            panic!("expected a stored result");
        };
        assert!(stored.tree_root.starts_with(dir.path().join("generated_apis")));
        assert!(stored.tree_root.join("app.py").is_file());
        assert!(stored.archive_path.is_file());
        assert_eq!(
            stored.download_path,
            format!("/api/download/{}", stored.artifact_id)
        );
        assert!(stored.files.iter().any(|f| f == "requirements.txt"));
        assert_eq!(
            fs::metadata(&stored.archive_path).unwrap().len(),
            stored.archive_size
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let file = starter(&dir, Ecosystem::Express);

        let report = generate(
            &file,
            GenerateOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert!(preview.files.iter().any(|f| f.path == "package.json"));
        assert!(!dir.path().join("generated_apis").exists());
    }

    #[test]
    fn test_target_and_store_overrides() {
        let dir = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        let file = starter(&dir, Ecosystem::Flask);

        let artifact = generate_artifact(
            &file,
            GenerateOptions {
                target: Some(Ecosystem::FastApi),
                store: Some(store.path()),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(artifact.ecosystem, Ecosystem::FastApi);
        assert!(artifact.tree_root.starts_with(store.path()));
        assert!(artifact.tree_root.join("main.py").is_file());
    }

    #[test]
    fn test_generate_rejects_empty_entities() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weaver.toml");
        fs::write(&path, "[project]\ntarget = \"flask\"\ndatabase = \"mysql\"\n").unwrap();
        let file = WeaverToml::open(&path).unwrap();

        let err = generate(&file, GenerateOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!dir.path().join("generated_apis").exists());
    }
}
