mod check;
mod completions;
mod fetch;
mod generate;
mod init;
mod targets;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fetch::FetchCommand;
use generate::GenerateCommand;
use init::InitCommand;
use targets::TargetsCommand;

/// Extension trait for exiting on errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for weaver_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for weaver_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error[{}]: {}", e.kind(), e);
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "weaver")]
#[command(version)]
#[command(about = "Generate ready-to-run CRUD API projects from a database schema")]
pub(crate) struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Fetch(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter weaver.toml
    Init(InitCommand),

    /// Validate weaver.toml without generating anything
    Check(CheckCommand),

    /// Generate, archive and store a project
    Generate(GenerateCommand),

    /// Copy a stored archive out of the store
    Fetch(FetchCommand),

    /// List supported targets and databases
    Targets(TargetsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["weaver", "check", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_json_conflicts_with_dry_run() {
        let result = Cli::try_parse_from(["weaver", "generate", "--json", "--dry-run"]);
        assert!(result.is_err());
    }
}
