use std::path::{Path, PathBuf};

use weaver_core::DatabaseKind;
use weaver_ir::Ecosystem;

use crate::{Error, Manifest, Result, template::starter};

/// A weaver.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct WeaverToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl WeaverToml {
    /// Open and parse a weaver.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Write a starter manifest to `path` and open it.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn create(
        path: impl AsRef<Path>,
        ecosystem: Ecosystem,
        database: DatabaseKind,
        force: bool,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() && !force {
            return Err(Box::new(Error::AlreadyExists { path }));
        }

        let content = starter(ecosystem, database);
        std::fs::write(&path, &content).map_err(|e| {
            Box::new(Error::Write {
                path: path.clone(),
                source: e,
            })
        })?;

        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the file; relative `[service] store` paths resolve against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
