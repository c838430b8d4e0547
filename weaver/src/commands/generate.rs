use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use weaver_ir::Ecosystem;
use weaver_manifest::WeaverToml;
use weaver_service::respond;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, generate::generate_artifact},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to weaver.toml (defaults to ./weaver.toml)
    #[arg(short, long, default_value = "weaver.toml")]
    pub config: PathBuf,

    /// Target ecosystem (overrides weaver.toml setting)
    #[arg(short, long)]
    pub target: Option<Ecosystem>,

    /// Artifact store directory (overrides [service] store)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Preview generated files without persisting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the generation response as JSON
    #[arg(long, conflicts_with = "dry_run")]
    pub json: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = WeaverToml::open(&self.config).unwrap_or_exit();
        let opts = GenerateOptions {
            target: self.target,
            store: self.store.as_deref(),
            dry_run: self.dry_run,
        };

        if self.json {
            let response = respond(generate_artifact(&file, opts));
            let json =
                serde_json::to_string_pretty(&response).wrap_err("Failed to serialize response")?;
            println!("{}", json);
            if !response.is_success() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let report = ops::generate(&file, opts).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
