//! Fetch command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from retrieving an archive.
#[derive(Debug)]
pub struct FetchReport {
    pub artifact_id: String,
    pub output: PathBuf,
    pub content_length: u64,
}

impl Report for FetchReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!(
            "wrote {} ({} bytes)",
            self.output.display(),
            self.content_length
        ));
        out.key_value_indented("artifact", &self.artifact_id);
    }
}
