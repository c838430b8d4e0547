//! Deriving stage: computes identifier bundles once per entity.

use std::collections::HashMap;

use crate::{
    error::{GenerationError, Result},
    identifiers::{DerivedEntity, derive_all},
    naming::NamingConvention,
    pipeline::{AssemblyContext, Phase, Stage},
    renderer::EcosystemRenderer,
};

/// Phase that derives every entity's identifiers and rejects collisions.
pub struct DerivePhase;

impl Phase for DerivePhase {
    fn stage(&self) -> Stage {
        Stage::Deriving
    }

    fn description(&self) -> &'static str {
        "Derive type names, route segments and file stems"
    }

    fn run(&self, ctx: &mut AssemblyContext<'_>) -> Result<()> {
        let derived = derive_all(&ctx.validated()?.entities);
        let renderer = ctx.renderer()?;
        let naming = renderer.naming();

        check_type_names(&derived)?;
        check_collisions(&derived)?;
        check_reserved(&derived, &naming)?;
        check_bindings(&derived, renderer, &naming)?;

        ctx.derived = Some(derived);
        Ok(())
    }
}

fn check_type_names(derived: &[DerivedEntity]) -> Result<()> {
    match derived.iter().find(|e| !e.ids.has_usable_type_name()) {
        Some(entity) => Err(GenerationError::validation(format!(
            "entity '{}' derives the type name '{}', which is not an identifier",
            entity.name(),
            entity.ids.type_name()
        ))),
        None => Ok(()),
    }
}

fn check_collisions(derived: &[DerivedEntity]) -> Result<()> {
    let mut type_names: HashMap<&str, &str> = HashMap::new();
    let mut file_stems: HashMap<String, &str> = HashMap::new();
    let mut route_segments: HashMap<&str, &str> = HashMap::new();

    for entity in derived {
        let ids = &entity.ids;

        if let Some(other) = type_names.insert(ids.type_name(), ids.raw()) {
            return Err(GenerationError::duplicate(
                ids.raw(),
                format!("type name '{}' is also derived from '{}'", ids.type_name(), other),
            ));
        }
        // Case-folding file systems would merge these files.
        if let Some(other) = file_stems.insert(ids.file_stem().to_lowercase(), ids.raw()) {
            return Err(GenerationError::duplicate(
                ids.raw(),
                format!("file name '{}' is also used by '{}'", ids.file_stem(), other),
            ));
        }
        if let Some(other) = route_segments.insert(ids.route_segment(), ids.raw()) {
            return Err(GenerationError::duplicate(
                ids.raw(),
                format!(
                    "route segment '{}' is also used by '{}'",
                    ids.route_segment(),
                    other
                ),
            ));
        }
    }
    Ok(())
}

fn check_reserved(derived: &[DerivedEntity], naming: &NamingConvention) -> Result<()> {
    for entity in derived {
        if let Some(reason) = naming.check_entity(&entity.ids) {
            return Err(GenerationError::reserved(entity.name(), reason));
        }
        for column in &entity.columns {
            if let Some(reason) = naming.check_field(&column.name) {
                return Err(GenerationError::reserved(entity.name(), reason));
            }
        }
    }
    Ok(())
}

/// Entrypoint bindings must be unique across entities and must not shadow
/// the entrypoint's own imports and globals.
fn check_bindings(
    derived: &[DerivedEntity],
    renderer: &dyn EcosystemRenderer,
    naming: &NamingConvention,
) -> Result<()> {
    let mut bound: HashMap<String, &str> = HashMap::new();

    for entity in derived {
        for name in renderer.entrypoint_bindings(entity) {
            if naming.is_framework_name(&name) {
                return Err(GenerationError::reserved(
                    entity.name(),
                    format!(
                        "'{}' shadows a framework name in the generated {} entrypoint",
                        name, naming.language
                    ),
                ));
            }
            if let Some(other) = bound.insert(name.clone(), entity.name()) {
                return Err(GenerationError::duplicate(
                    entity.name(),
                    format!("'{}' is also bound in the entrypoint for '{}'", name, other),
                ));
            }
        }
    }
    Ok(())
}
