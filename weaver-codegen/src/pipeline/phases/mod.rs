//! Built-in pipeline phases.

mod derive;
mod finalize;
mod render;
mod validate;

pub use derive::DerivePhase;
pub use finalize::FinalizePhase;
pub use render::RenderPhase;
pub use validate::ValidatePhase;
