//! Target-agnostic project assembly for the Weaver CRUD project generator.
//!
//! This crate turns a [`GenerationRequest`](weaver_ir::GenerationRequest)
//! into a [`ProjectTree`](tree::ProjectTree). Concrete targets plug in
//! through the [`EcosystemRenderer`](renderer::EcosystemRenderer) trait
//! (e.g., `weaver-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder, Indent)
//! - [`identifiers`] - Identifier derivation (IdentifierBundle, DerivedEntity)
//! - [`naming`] - Reserved names per target
//! - [`endpoints`] - The CRUD endpoint catalog
//! - [`renderer`] - The per-ecosystem renderer trait and its inputs
//! - [`docs`] - Shared README rendering
//! - [`imports`] - Import and dependency collection
//! - [`tree`] - The in-memory project tree
//! - [`pipeline`] - The project assembler
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod docs;
pub mod endpoints;
mod error;
pub mod identifiers;
pub mod imports;
pub mod naming;
pub mod pipeline;
pub mod renderer;
pub mod tree;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{CollisionReason, ErrorKind, GenerationError, Result};
