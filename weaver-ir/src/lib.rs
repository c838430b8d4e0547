//! Schema model and request types for the Weaver CRUD project generator.
//!
//! This crate provides the target-agnostic types shared by every stage of
//! the generation pipeline.
//!
//! # Architecture
//!
//! ```text
//! introspection / weaver.toml → GenerationRequest → ValidatedRequest → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Target-agnostic (no Python/JavaScript-specific concerns)
//! - Immutable once constructed
//! - Serializable at the request boundary

mod ecosystem;
mod entity;
mod request;

pub use ecosystem::Ecosystem;
pub use entity::{Field, SchemaEntity};
pub use request::{GenerationRequest, ValidatedRequest};
pub use weaver_core::DatabaseKind;
