use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .wrap_err_with(|| format!("cannot create {}", path.display()))?;
                write_completions(self.shell, &mut file)?;
                tracing::debug!(path = %path.display(), shell = ?self.shell, "wrote completions");
            }
            None => write_completions(self.shell, &mut io::stdout().lock())?,
        }
        Ok(())
    }
}

/// Completions are registered under the command's own name.
fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
    out.flush().wrap_err("cannot flush completions")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_bash_script_lists_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_weaver()"));
        for sub in ["init", "check", "generate", "fetch", "targets"] {
            assert!(script.contains(sub), "missing {}", sub);
        }
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weaver.fish");

        let cli = Cli::try_parse_from([
            "weaver",
            "completions",
            "fish",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();
        cli.run().unwrap();

        let script = fs::read_to_string(&path).unwrap();
        assert!(script.contains("complete -c weaver"));
    }
}
