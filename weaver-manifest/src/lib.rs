//! weaver.toml parsing and validation.
//!
//! A manifest names the target, the database kind and the entities to
//! scaffold:
//!
//! ```toml
//! [project]
//! target = "flask"
//! database = "mysql"
//!
//! [[entities]]
//! name = "orders"
//!
//! [[entities.fields]]
//! name = "total"
//! type = "decimal(10,2)"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod template;
mod validate;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use file::WeaverToml;
pub use manifest::{Manifest, ProjectConfig, ServiceSection};
pub use template::starter;
pub use validate::ParseContext;

/// Parse a weaver.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    WeaverToml::open(path).map(|file| file.manifest().clone())
}

/// Parse a weaver.toml from a string (uses "weaver.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, manifest::DEFAULT_FILENAME)
}

/// Parse a weaver.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    Manifest::from_str_with_filename(content, filename)
}
