use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        ops::targets().render(&mut TerminalOutput::new());
        Ok(())
    }
}
