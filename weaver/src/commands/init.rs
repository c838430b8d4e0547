use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use weaver_core::DatabaseKind;
use weaver_ir::Ecosystem;
use weaver_manifest::WeaverToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(short, long, default_value = "weaver.toml")]
    pub config: PathBuf,

    /// Target ecosystem (flask, fastapi, express)
    #[arg(short, long, default_value = "flask")]
    pub target: Ecosystem,

    /// Source database (mysql, mongodb)
    #[arg(short, long, default_value = "mysql")]
    pub database: DatabaseKind,

    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file =
            WeaverToml::create(&self.config, self.target, self.database, self.force).unwrap_or_exit();

        println!("✓ Created {}", file.path().display());
        println!();
        println!("  target:   {}", self.target.label());
        println!("  database: {}", self.database);
        println!("  entities: {}", file.manifest().entities.len());
        println!();
        println!("Next steps:");
        println!("  weaver check -c {}", file.path().display());
        println!("  weaver generate -c {}", file.path().display());

        Ok(())
    }
}
