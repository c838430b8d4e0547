//! Starter weaver.toml written by `weaver init`.

use weaver_core::DatabaseKind;
use weaver_ir::Ecosystem;

/// Render a starter manifest with two example entities.
///
/// Declared types follow what introspection reports for the database:
/// column types for MySQL, value types for MongoDB.
pub fn starter(ecosystem: Ecosystem, database: DatabaseKind) -> String {
    let (name_type, price_type, flag_type, ref_type) = match database {
        DatabaseKind::Mysql => ("varchar(120)", "decimal(10,2)", "tinyint(1)", "int"),
        DatabaseKind::Mongodb => ("str", "float", "bool", "ObjectId"),
    };

    format!(
        r#"# Describe the tables or collections to scaffold, then run `weaver generate`.

[project]
target = "{target}"
database = "{database}"
include_auth = false

[service]
store = "generated_apis"

[[entities]]
name = "products"

[[entities.fields]]
name = "title"
type = "{name_type}"

[[entities.fields]]
name = "price"
type = "{price_type}"

[[entities.fields]]
name = "in_stock"
type = "{flag_type}"
nullable = true

[[entities]]
name = "reviews"

[[entities.fields]]
name = "product_id"
type = "{ref_type}"
references = "products"

[[entities.fields]]
name = "body"
type = "text"
"#,
        target = ecosystem.as_str(),
        database = database.as_str(),
    )
}
