//! Core utilities and types for the Weaver CRUD project generator.
//!
//! This crate provides fundamental types and utilities used across
//! the Weaver workspace.

mod file;
mod type_mapper;
mod types;
mod utils;

// File operations
pub use file::{GeneratedFile, write_file};
// Fundamental types
pub use type_mapper::{FieldKind, TypeMapper};
pub use types::DatabaseKind;
// String utilities
pub use utils::{to_pascal_case, validate_identifier};
