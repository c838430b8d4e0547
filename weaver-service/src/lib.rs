//! Generation service for the Weaver CRUD project generator.
//!
//! Wires the assembler to the built-in targets, archives the resulting
//! [`ProjectTree`](weaver_codegen::tree::ProjectTree) and persists both under
//! a fresh artifact id.
//!
//! ```text
//! GenerationRequest → Assembler → ProjectTree → archive → ArtifactStore → Artifact
//! ```
//!
//! # Module Organization
//!
//! - [`archive`] - Deterministic ZIP archiving
//! - [`store`] - Artifact storage (`FsArtifactStore`)
//! - [`boundary`] - Serializable success and error responses

pub mod archive;
mod artifact;
pub mod boundary;
mod config;
mod service;
pub mod store;
mod targets;

pub use artifact::{ArchiveBytes, Artifact, ArtifactHandle, StoredArtifact};
pub use boundary::{GenerationResponse, respond};
pub use config::ServiceConfig;
pub use service::{GenerationService, stamp_for, stamp_now};
pub use store::{ArtifactStore, FsArtifactStore};
pub use targets::Targets;
