//! Identifier derivation.
//!
//! Every name a renderer needs for an entity is derived exactly once into an
//! [`IdentifierBundle`] and threaded through every render call. Renderers
//! never re-derive names from the raw entity name.

use weaver_core::{FieldKind, to_pascal_case};
use weaver_ir::{Field, SchemaEntity};

/// Columns every generated model defines itself.
///
/// Introspected fields with one of these names are skipped.
pub const GENERATED_COLUMNS: &[&str] = &[
    "id",
    "_id",
    "created_at",
    "updated_at",
    "createdAt",
    "updatedAt",
];

/// Returns true if the generated model already defines a column named `name`.
pub fn is_generated_column(name: &str) -> bool {
    GENERATED_COLUMNS.contains(&name)
}

/// The derived names of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierBundle {
    raw: String,
    type_name: String,
    route_segment: String,
    file_stem: String,
}

impl IdentifierBundle {
    /// Derive every identifier variant from a raw entity name.
    ///
    /// Derivation is a pure function of `raw`.
    pub fn derive(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            type_name: to_pascal_case(raw),
            route_segment: raw.to_lowercase(),
            file_stem: raw.to_string(),
        }
    }

    /// The source name, as introspected.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// PascalCase class/model name (`user_profiles` → `UserProfiles`).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// URL path segment below `/api/`.
    pub fn route_segment(&self) -> &str {
        &self.route_segment
    }

    /// Module and file name.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Mount path of the entity's collection (`/api/{segment}`).
    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.route_segment)
    }

    /// Whether the type name can start an identifier. Raw names made only of
    /// underscores and digits (`_`, `_1`) derive an empty or digit-led one.
    pub fn has_usable_type_name(&self) -> bool {
        self.type_name
            .chars()
            .next()
            .is_some_and(|c| !c.is_ascii_digit())
    }
}

/// A field prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub declared_type: String,
    pub kind: FieldKind,
    pub nullable: bool,
    /// The field was (part of) the source primary key.
    pub source_primary_key: bool,
    pub foreign_key: bool,
    /// Identifiers of the referenced entity when it is part of the request.
    pub references: Option<IdentifierBundle>,
}

impl Column {
    fn from_field(field: &Field, references: Option<IdentifierBundle>) -> Self {
        Self {
            name: field.name.clone(),
            declared_type: field.declared_type.clone(),
            kind: FieldKind::from_declared(&field.declared_type),
            nullable: field.nullable,
            source_primary_key: field.primary_key,
            foreign_key: field.is_foreign_key(),
            references,
        }
    }
}

/// An entity paired with its identifier bundle and render-ready columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedEntity {
    pub entity: SchemaEntity,
    pub ids: IdentifierBundle,
    /// Introspected fields in declaration order, without generated columns.
    pub columns: Vec<Column>,
}

impl DerivedEntity {
    /// Derive identifiers for `entity`.
    ///
    /// `resolve` maps a referenced entity name to its bundle when that entity
    /// is part of the same request.
    pub fn new<'a>(
        entity: SchemaEntity,
        resolve: impl Fn(&str) -> Option<&'a IdentifierBundle>,
    ) -> Self {
        let ids = IdentifierBundle::derive(&entity.name);
        let columns = entity
            .fields
            .iter()
            .filter(|f| !is_generated_column(&f.name))
            .map(|f| {
                let references = f.references.as_deref().and_then(&resolve).cloned();
                Column::from_field(f, references)
            })
            .collect();

        Self {
            entity,
            ids,
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }
}

/// Derive bundles for a list of entities, resolving cross-entity references.
pub fn derive_all(entities: &[SchemaEntity]) -> Vec<DerivedEntity> {
    let bundles: Vec<IdentifierBundle> = entities
        .iter()
        .map(|e| IdentifierBundle::derive(&e.name))
        .collect();

    entities
        .iter()
        .map(|entity| {
            DerivedEntity::new(entity.clone(), |target| {
                bundles.iter().find(|b| b.raw() == target)
            })
        })
        .collect()
}
