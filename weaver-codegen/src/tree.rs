//! In-memory project tree.

use std::{io, path::Path};

use indexmap::IndexMap;
use weaver_core::{GeneratedFile, write_file};

use crate::error::{GenerationError, Result};

/// A rendered file: relative path plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Render any [`GeneratedFile`] into an owned value.
    pub fn from_generated(file: &impl GeneratedFile) -> Self {
        Self::new(file.path(), file.render())
    }
}

impl GeneratedFile for RenderedFile {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Ordered mapping from relative path to file content.
///
/// Insertion order is preserved so archives built from equal trees are
/// byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTree {
    files: IndexMap<String, Vec<u8>>,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    ///
    /// A path that is already present is an engine bug and is reported as
    /// [`GenerationError::Render`]; the existing content is left untouched.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Result<()> {
        let path = path.into();
        if path.is_empty() || path.starts_with('/') || path.split('/').any(|s| s == "..") {
            return Err(GenerationError::render(format!(
                "renderer produced an invalid relative path '{}'",
                path
            )));
        }
        if self.files.contains_key(&path) {
            return Err(GenerationError::render(format!(
                "renderer produced '{}' twice",
                path
            )));
        }
        self.files.insert(path, content.into());
        Ok(())
    }

    /// Add a rendered file.
    pub fn insert_file(&mut self, file: RenderedFile) -> Result<()> {
        self.insert(file.path, file.content.into_bytes())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Get a file's content as UTF-8 text.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Iterate over files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_slice()))
    }

    /// Iterate over paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total content size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Write every file below `base`, creating directories as needed.
    pub fn write_to(&self, base: &Path) -> io::Result<()> {
        for (path, content) in self.iter() {
            write_file(base, path, content)?;
        }
        Ok(())
    }
}
