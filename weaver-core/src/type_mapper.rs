//! Type mapping between introspected column types and language-specific types.

/// Normalized kind of an introspected field.
///
/// Relational column types (`varchar(255)`, `int(11) unsigned`) and document
/// value types (`str`, `ObjectId`) both collapse into this language-agnostic
/// representation. Use a [`TypeMapper`] to render it for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Boolean,
    String {
        max_length: Option<u32>,
    },
    Text,
    Date,
    DateTime,
    Json,
    Binary,
    ObjectId,
}

impl FieldKind {
    /// Classify a declared type string as reported by schema introspection.
    ///
    /// Unknown types fall back to an unbounded string.
    pub fn from_declared(declared: &str) -> Self {
        let normalized = declared.trim().to_ascii_lowercase();
        let (base, params) = split_params(&normalized);
        let base = base.split_whitespace().next().unwrap_or("");

        match base {
            "tinyint" if params.first() == Some(&1) => FieldKind::Boolean,
            "int" | "integer" | "bigint" | "smallint" | "tinyint" | "mediumint" | "serial"
            | "bigserial" | "long" | "int32" | "int64" | "year" => FieldKind::Integer,
            "float" | "double" | "real" | "number" => FieldKind::Float,
            "decimal" | "numeric" | "dec" | "fixed" | "decimal128" | "money" => FieldKind::Decimal {
                precision: params.first().copied(),
                scale: params.get(1).copied(),
            },
            "bool" | "boolean" | "bit" => FieldKind::Boolean,
            "char" | "varchar" | "character" | "nchar" | "nvarchar" => FieldKind::String {
                max_length: params.first().copied(),
            },
            "string" | "str" | "enum" | "set" | "uuid" | "time" => {
                FieldKind::String { max_length: None }
            }
            "text" | "tinytext" | "mediumtext" | "longtext" | "clob" => FieldKind::Text,
            "date" => FieldKind::Date,
            "datetime" | "timestamp" | "timestamptz" => FieldKind::DateTime,
            "json" | "jsonb" | "dict" | "object" | "array" | "list" => FieldKind::Json,
            "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary" | "varbinary" | "bytes"
            | "bytea" => FieldKind::Binary,
            "objectid" => FieldKind::ObjectId,
            _ => FieldKind::String { max_length: None },
        }
    }

    /// Returns true for numeric kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldKind::Integer | FieldKind::Float | FieldKind::Decimal { .. }
        )
    }
}

/// Split `decimal(10,2)` into `("decimal", [10, 2])`.
///
/// Non-numeric parameters (e.g. `enum('a','b')`) are dropped.
fn split_params(declared: &str) -> (&str, Vec<u32>) {
    let Some(open) = declared.find('(') else {
        return (declared, Vec::new());
    };
    let close = declared[open..]
        .find(')')
        .map(|i| open + i)
        .unwrap_or(declared.len());

    let params = declared[open + 1..close]
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default();

    (&declared[..open], params)
}

/// Trait for mapping field kinds to language-specific type strings.
///
/// Implement this trait for each target data layer (ORM, schema library).
pub trait TypeMapper {
    /// The target language or data layer name
    fn language(&self) -> &'static str;

    /// Map a field kind to a language-specific type expression
    fn map_field_kind(&self, kind: FieldKind) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relational_types() {
        assert_eq!(FieldKind::from_declared("int(11)"), FieldKind::Integer);
        assert_eq!(FieldKind::from_declared("BIGINT unsigned"), FieldKind::Integer);
        assert_eq!(
            FieldKind::from_declared("varchar(255)"),
            FieldKind::String {
                max_length: Some(255)
            }
        );
        assert_eq!(
            FieldKind::from_declared("decimal(10,2)"),
            FieldKind::Decimal {
                precision: Some(10),
                scale: Some(2)
            }
        );
        assert_eq!(FieldKind::from_declared("tinyint(1)"), FieldKind::Boolean);
        assert_eq!(FieldKind::from_declared("tinyint(4)"), FieldKind::Integer);
        assert_eq!(FieldKind::from_declared("longtext"), FieldKind::Text);
        assert_eq!(FieldKind::from_declared("datetime"), FieldKind::DateTime);
        assert_eq!(FieldKind::from_declared("date"), FieldKind::Date);
        assert_eq!(FieldKind::from_declared("json"), FieldKind::Json);
    }

    #[test]
    fn test_document_types() {
        assert_eq!(FieldKind::from_declared("str"), FieldKind::String { max_length: None });
        assert_eq!(FieldKind::from_declared("ObjectId"), FieldKind::ObjectId);
        assert_eq!(FieldKind::from_declared("dict"), FieldKind::Json);
        assert_eq!(FieldKind::from_declared("list"), FieldKind::Json);
        assert_eq!(FieldKind::from_declared("bool"), FieldKind::Boolean);
        assert_eq!(FieldKind::from_declared("number"), FieldKind::Float);
    }

    #[test]
    fn test_unknown_falls_back_to_string() {
        assert_eq!(
            FieldKind::from_declared("geometry"),
            FieldKind::String { max_length: None }
        );
        assert_eq!(
            FieldKind::from_declared("enum('a','b')"),
            FieldKind::String { max_length: None }
        );
        assert_eq!(FieldKind::from_declared(""), FieldKind::String { max_length: None });
    }

    #[test]
    fn test_is_numeric() {
        assert!(FieldKind::Integer.is_numeric());
        assert!(FieldKind::from_declared("numeric").is_numeric());
        assert!(!FieldKind::Text.is_numeric());
    }
}
