use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FetchCommand {
    /// Artifact id printed by `weaver generate`
    pub artifact_id: String,

    /// Artifact store directory
    #[arg(long, default_value = "generated_apis")]
    pub store: PathBuf,

    /// Where to write the archive (defaults to ./<id>.zip)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FetchCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::fetch(&self.store, &self.artifact_id, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
