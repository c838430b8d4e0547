//! Validating stage: resolves the target and checks entity and field names.

use std::collections::{HashMap, HashSet};

use weaver_core::{DatabaseKind, validate_identifier};
use weaver_ir::{Ecosystem, SchemaEntity, ValidatedRequest};

use crate::{
    error::{GenerationError, Result},
    identifiers::is_generated_column,
    pipeline::{AssemblyContext, Diagnostic, Phase, Stage},
};

/// Phase that turns a raw request into a [`ValidatedRequest`].
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn stage(&self) -> Stage {
        Stage::Validating
    }

    fn description(&self) -> &'static str {
        "Resolve target and database, check entity and field names"
    }

    fn run(&self, ctx: &mut AssemblyContext<'_>) -> Result<()> {
        let request = ctx.request;

        let ecosystem: Ecosystem = request
            .target
            .parse()
            .map_err(|_| GenerationError::unsupported_target(&request.target))?;

        let database: DatabaseKind = request
            .database
            .parse()
            .map_err(GenerationError::validation)?;

        if request.entities.is_empty() {
            return Err(GenerationError::validation(
                "request must contain at least one entity",
            ));
        }

        check_entity_names(&request.entities)?;
        for entity in &request.entities {
            check_field_names(entity)?;
        }

        let diagnostics = lint(&request.entities);
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }

        ctx.validated = Some(ValidatedRequest {
            ecosystem,
            database,
            entities: request.entities.clone(),
            include_auth: request.include_auth,
        });
        Ok(())
    }
}

fn check_entity_names(entities: &[SchemaEntity]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for entity in entities {
        if let Some(reason) = validate_identifier(&entity.name) {
            return Err(GenerationError::validation(format!(
                "invalid entity name '{}': {}",
                entity.name, reason
            )));
        }

        if let Some(first) = seen.insert(entity.name.to_lowercase(), &entity.name) {
            let detail = if first == entity.name {
                format!("'{}' appears twice", first)
            } else {
                format!("'{}' and '{}' differ only in case", first, entity.name)
            };
            return Err(GenerationError::duplicate(&entity.name, detail));
        }
    }
    Ok(())
}

fn check_field_names(entity: &SchemaEntity) -> Result<()> {
    let mut seen = HashSet::new();

    for field in &entity.fields {
        if let Some(reason) = validate_identifier(&field.name) {
            return Err(GenerationError::validation(format!(
                "invalid field name '{}.{}': {}",
                entity.name, field.name, reason
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(GenerationError::validation(format!(
                "field '{}' appears twice in entity '{}'",
                field.name, entity.name
            )));
        }
    }
    Ok(())
}

/// Collect non-fatal findings.
fn lint(entities: &[SchemaEntity]) -> Vec<Diagnostic> {
    let stage = Stage::Validating.as_str();
    let known: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    let mut diagnostics = Vec::new();

    for entity in entities {
        if entity.fields.is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    stage,
                    format!(
                        "entity '{}' has no fields; only id and timestamps will be generated",
                        entity.name
                    ),
                )
                .at(format!("entities.{}", entity.name)),
            );
        }

        for field in &entity.fields {
            let location = format!("entities.{}.fields.{}", entity.name, field.name);

            if is_generated_column(&field.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        stage,
                        format!(
                            "field '{}' is generated for every model and will be skipped",
                            field.name
                        ),
                    )
                    .at(location.clone()),
                );
            }

            let unresolved = field
                .references
                .as_deref()
                .filter(|target| !known.contains(target));
            if let Some(target) = unresolved {
                diagnostics.push(
                    Diagnostic::warning(
                        stage,
                        format!(
                            "field '{}' references '{}', which is not part of the request",
                            field.name, target
                        ),
                    )
                    .at(location),
                );
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use weaver_ir::{Field, GenerationRequest};

    use super::*;
    use crate::{
        error::ErrorKind,
        testing::{StubRegistry, stamp},
    };

    fn run(request: &GenerationRequest) -> Result<AssemblyContext<'_>> {
        static REGISTRY: StubRegistry = StubRegistry;
        let mut ctx = AssemblyContext::new(request, &REGISTRY, stamp());
        ValidatePhase.run(&mut ctx)?;
        Ok(ctx)
    }

    fn request(target: &str, entities: Vec<SchemaEntity>) -> GenerationRequest {
        GenerationRequest {
            target: target.to_string(),
            database: "mysql".to_string(),
            entities,
            include_auth: false,
        }
    }

    #[test]
    fn test_resolves_target_and_database() {
        let req = request("Express.js", vec![SchemaEntity::new("orders")]);
        let ctx = run(&req).unwrap();
        let validated = ctx.validated.unwrap();
        assert_eq!(validated.ecosystem, Ecosystem::Express);
        assert_eq!(validated.database, DatabaseKind::Mysql);
    }

    #[test]
    fn test_unsupported_target_checked_first() {
        let req = request("graphql", vec![]);
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTarget);
    }

    #[test]
    fn test_unknown_database_is_validation_error() {
        let mut req = request("flask", vec![SchemaEntity::new("orders")]);
        req.database = "oracle".to_string();
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_empty_entities_rejected() {
        let req = request("flask", vec![]);
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_entity_name_rejected() {
        let req = request("flask", vec![SchemaEntity::new("order-items")]);
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_case_insensitive_duplicates_collide() {
        let req = request(
            "flask",
            vec![SchemaEntity::new("Users"), SchemaEntity::new("users")],
        );
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::IdentifierCollision);
        assert!(err.to_string().contains("differ only in case"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let req = request(
            "flask",
            vec![
                SchemaEntity::new("orders")
                    .with_field(Field::new("total", "int"))
                    .with_field(Field::new("total", "float")),
            ],
        );
        let err = run(&req).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_warnings() {
        let req = request(
            "flask",
            vec![
                SchemaEntity::new("events"),
                SchemaEntity::new("orders")
                    .with_field(Field::new("id", "int").primary_key())
                    .with_field(Field::new("coupon_id", "int").references("coupons")),
            ],
        );
        let ctx = run(&req).unwrap();

        let warnings = ctx.diagnostics.iter().filter(|d| d.severity.is_warning());
        assert_eq!(warnings.count(), 3);
        let locations: Vec<_> = ctx
            .diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(
            locations,
            [
                "entities.events",
                "entities.orders.fields.id",
                "entities.orders.fields.coupon_id"
            ]
        );
    }
}
