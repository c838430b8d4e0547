//! Python type mapper implementations.

use weaver_core::{DatabaseKind, FieldKind, TypeMapper};

/// Maps field kinds to SQLAlchemy column types (module aliased as `sa`).
pub struct SqlAlchemyTypeMapper;

impl TypeMapper for SqlAlchemyTypeMapper {
    fn language(&self) -> &'static str {
        "sqlalchemy"
    }

    fn map_field_kind(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::Integer => "sa.Integer".to_string(),
            FieldKind::Float => "sa.Float".to_string(),
            FieldKind::Decimal {
                precision: Some(precision),
                scale,
            } => format!("sa.Numeric({}, {})", precision, scale.unwrap_or(0)),
            FieldKind::Decimal { precision: None, .. } => "sa.Numeric".to_string(),
            FieldKind::Boolean => "sa.Boolean".to_string(),
            FieldKind::String { max_length } => {
                format!("sa.String({})", max_length.unwrap_or(255))
            }
            FieldKind::Text => "sa.Text".to_string(),
            FieldKind::Date => "sa.Date".to_string(),
            FieldKind::DateTime => "sa.DateTime".to_string(),
            FieldKind::Json => "sa.JSON".to_string(),
            FieldKind::Binary => "sa.LargeBinary".to_string(),
            FieldKind::ObjectId => "sa.String(24)".to_string(),
        }
    }
}

/// Maps field kinds to pydantic payload annotations.
///
/// Document stores cannot encode `date` or `Decimal`, so those widen to
/// `datetime` and `float` for MongoDB.
pub struct PydanticTypeMapper {
    pub database: DatabaseKind,
}

impl TypeMapper for PydanticTypeMapper {
    fn language(&self) -> &'static str {
        "pydantic"
    }

    fn map_field_kind(&self, kind: FieldKind) -> String {
        let relational = self.database.is_relational();
        let ty = match kind {
            FieldKind::Integer => "int",
            FieldKind::Float => "float",
            FieldKind::Decimal { .. } if relational => "Decimal",
            FieldKind::Decimal { .. } => "float",
            FieldKind::Boolean => "bool",
            FieldKind::String { .. } | FieldKind::Text | FieldKind::ObjectId => "str",
            FieldKind::Date if relational => "date",
            FieldKind::Date | FieldKind::DateTime => "datetime",
            FieldKind::Json => "Any",
            FieldKind::Binary => "bytes",
        };
        ty.to_string()
    }
}
