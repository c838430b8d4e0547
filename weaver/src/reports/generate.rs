//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target label, e.g. "Express.js".
    pub target: String,
    /// Warning messages from the assembler.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// The artifact was persisted.
    Stored(StoredResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the artifact was persisted.
#[derive(Debug)]
pub struct StoredResult {
    pub artifact_id: String,
    pub tree_root: PathBuf,
    pub archive_path: PathBuf,
    pub archive_size: u64,
    pub download_path: String,
    pub docs_path: String,
    /// Relative paths of the generated files, in tree order.
    pub files: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Stored(stored) => self.render_stored(out, stored),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_stored(&self, out: &mut dyn Output, stored: &StoredResult) {
        out.section(&format!("{} project ({} files)", self.target, stored.files.len()));
        for file in &stored.files {
            out.added_item(file);
        }
        out.newline();

        out.key_value("Artifact", &stored.artifact_id);
        out.key_value("Tree", &stored.tree_root.display().to_string());
        out.key_value(
            "Archive",
            &format!(
                "{} ({} bytes)",
                stored.archive_path.display(),
                stored.archive_size
            ),
        );
        out.key_value("Download", &stored.download_path);
        out.key_value("Docs", &stored.docs_path);
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
    }
}
