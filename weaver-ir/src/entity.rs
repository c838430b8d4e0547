//! Schema model for one table or collection.

use serde::{Deserialize, Serialize};

/// One introspected column or document field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Field {
    /// Source column name.
    pub name: String,
    /// Type as reported by introspection (`varchar(255)`, `str`, ...).
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub foreign_key: bool,
    /// Name of the referenced entity, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl Field {
    /// Create a non-nullable field with no key constraints.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable: false,
            primary_key: false,
            foreign_key: false,
            references: None,
        }
    }

    /// Mark the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the field as part of the source primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark the field as a foreign key to `entity`.
    pub fn references(mut self, entity: impl Into<String>) -> Self {
        self.foreign_key = true;
        self.references = Some(entity.into());
        self
    }

    pub fn is_foreign_key(&self) -> bool {
        self.foreign_key || self.references.is_some()
    }
}

/// One table or collection to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaEntity {
    /// Source identifier of the table or collection.
    pub name: String,
    /// Introspected fields in declaration order. May be empty.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Informational row or document count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_estimate: Option<u64>,
}

impl SchemaEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            row_estimate: None,
        }
    }

    /// Append a field, preserving declaration order.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_row_estimate(mut self, rows: u64) -> Self {
        self.row_estimate = Some(rows);
        self
    }

    /// Look up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = Field::new("user_id", "int").nullable().references("users");
        assert!(field.nullable);
        assert!(field.is_foreign_key());
        assert_eq!(field.references.as_deref(), Some("users"));
        assert!(!field.primary_key);
    }

    #[test]
    fn test_foreign_key_without_reference() {
        let mut field = Field::new("owner", "int");
        assert!(!field.is_foreign_key());
        field.foreign_key = true;
        assert!(field.is_foreign_key());
    }

    #[test]
    fn test_entity_preserves_field_order() {
        let entity = SchemaEntity::new("orders")
            .with_field(Field::new("total", "number"))
            .with_field(Field::new("status", "varchar(20)"))
            .with_row_estimate(42);

        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["total", "status"]);
        assert_eq!(entity.row_estimate, Some(42));
        assert!(entity.field("status").is_some());
        assert!(entity.field("missing").is_none());
    }

    #[test]
    fn test_deserialize_field_defaults() {
        let field: Field = serde_json::from_str(r#"{"name": "total", "type": "number"}"#).unwrap();
        assert_eq!(field, Field::new("total", "number"));
    }

    #[test]
    fn test_deserialize_entity_without_fields() {
        let entity: SchemaEntity = serde_json::from_str(r#"{"name": "events"}"#).unwrap();
        assert!(entity.fields.is_empty());
        assert!(entity.row_estimate.is_none());
    }
}
