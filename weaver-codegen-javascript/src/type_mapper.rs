//! JavaScript type mapper implementations.

use weaver_core::{FieldKind, TypeMapper};

/// Maps field kinds to Mongoose schema types.
pub struct MongooseTypeMapper;

impl TypeMapper for MongooseTypeMapper {
    fn language(&self) -> &'static str {
        "mongoose"
    }

    fn map_field_kind(&self, kind: FieldKind) -> String {
        let ty = match kind {
            FieldKind::Integer | FieldKind::Float | FieldKind::Decimal { .. } => "Number",
            FieldKind::Boolean => "Boolean",
            FieldKind::String { .. } | FieldKind::Text => "String",
            FieldKind::Date | FieldKind::DateTime => "Date",
            FieldKind::Json => "mongoose.Schema.Types.Mixed",
            FieldKind::Binary => "Buffer",
            FieldKind::ObjectId => "mongoose.Schema.Types.ObjectId",
        };
        ty.to_string()
    }
}

/// Maps field kinds to Sequelize `DataTypes`.
pub struct SequelizeTypeMapper;

impl TypeMapper for SequelizeTypeMapper {
    fn language(&self) -> &'static str {
        "sequelize"
    }

    fn map_field_kind(&self, kind: FieldKind) -> String {
        match kind {
            FieldKind::Integer => "DataTypes.INTEGER".to_string(),
            FieldKind::Float => "DataTypes.FLOAT".to_string(),
            FieldKind::Decimal {
                precision: Some(precision),
                scale,
            } => format!("DataTypes.DECIMAL({}, {})", precision, scale.unwrap_or(0)),
            FieldKind::Decimal { precision: None, .. } => "DataTypes.DECIMAL".to_string(),
            FieldKind::Boolean => "DataTypes.BOOLEAN".to_string(),
            FieldKind::String {
                max_length: Some(len),
            } => format!("DataTypes.STRING({})", len),
            FieldKind::String { max_length: None } => "DataTypes.STRING".to_string(),
            FieldKind::Text => "DataTypes.TEXT".to_string(),
            FieldKind::Date => "DataTypes.DATEONLY".to_string(),
            FieldKind::DateTime => "DataTypes.DATE".to_string(),
            FieldKind::Json => "DataTypes.JSON".to_string(),
            FieldKind::Binary => "DataTypes.BLOB".to_string(),
            FieldKind::ObjectId => "DataTypes.STRING(24)".to_string(),
        }
    }
}
