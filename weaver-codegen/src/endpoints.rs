//! CRUD endpoint catalog.

use crate::identifiers::IdentifierBundle;

/// One of the five operations generated for every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    /// Every operation, in the order they are rendered and documented.
    pub const ALL: [CrudOperation; 5] = [
        CrudOperation::List,
        CrudOperation::Get,
        CrudOperation::Create,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];

    /// Upper-case HTTP method.
    pub fn method(&self) -> &'static str {
        match self {
            CrudOperation::List | CrudOperation::Get => "GET",
            CrudOperation::Create => "POST",
            CrudOperation::Update => "PUT",
            CrudOperation::Delete => "DELETE",
        }
    }

    /// Returns true if the path addresses a single record.
    pub fn takes_id(&self) -> bool {
        matches!(
            self,
            CrudOperation::Get | CrudOperation::Update | CrudOperation::Delete
        )
    }

    /// Returns true if the request carries a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, CrudOperation::Create | CrudOperation::Update)
    }

    /// Verb used in handler names (`list_orders`, `get_orders`, ...).
    pub fn verb(&self) -> &'static str {
        match self {
            CrudOperation::List => "list",
            CrudOperation::Get => "get",
            CrudOperation::Create => "create",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }

    /// Documented path, with `{id}` as the record placeholder.
    pub fn path(&self, ids: &IdentifierBundle) -> String {
        if self.takes_id() {
            format!("{}/{{id}}", ids.collection_path())
        } else {
            ids.collection_path()
        }
    }

    /// One-line description for documentation.
    pub fn summary(&self, ids: &IdentifierBundle) -> String {
        let name = ids.raw();
        match self {
            CrudOperation::List => format!("List all {name}"),
            CrudOperation::Get => format!("Get {name} by ID"),
            CrudOperation::Create => format!("Create {name}"),
            CrudOperation::Update => format!("Update {name} by ID"),
            CrudOperation::Delete => format!("Delete {name} by ID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let ids = IdentifierBundle::derive("Orders");
        let rendered: Vec<String> = CrudOperation::ALL
            .iter()
            .map(|op| format!("{} {}", op.method(), op.path(&ids)))
            .collect();

        assert_eq!(
            rendered,
            [
                "GET /api/orders",
                "GET /api/orders/{id}",
                "POST /api/orders",
                "PUT /api/orders/{id}",
                "DELETE /api/orders/{id}",
            ]
        );
    }

    #[test]
    fn test_flags() {
        assert!(!CrudOperation::List.takes_id());
        assert!(CrudOperation::Delete.takes_id());
        assert!(CrudOperation::Create.has_body());
        assert!(!CrudOperation::Get.has_body());
    }

    #[test]
    fn test_summary_uses_raw_name() {
        let ids = IdentifierBundle::derive("user_profiles");
        assert_eq!(
            CrudOperation::Get.summary(&ids),
            "Get user_profiles by ID"
        );
    }
}
