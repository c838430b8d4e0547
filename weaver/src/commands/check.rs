use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use weaver_ir::Ecosystem;
use weaver_manifest::WeaverToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to weaver.toml (defaults to ./weaver.toml)
    #[arg(short, long, default_value = "weaver.toml")]
    pub config: PathBuf,

    /// Target ecosystem (overrides weaver.toml setting)
    #[arg(short, long)]
    pub target: Option<Ecosystem>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = WeaverToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&file, self.target).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
