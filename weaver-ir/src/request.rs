//! Generation requests.

use serde::{Deserialize, Serialize};
use weaver_core::DatabaseKind;

use crate::{Ecosystem, SchemaEntity};

/// A generation request as received at the boundary.
///
/// Target and database are kept as raw strings so that unsupported values
/// can be reported as structured errors instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub target: String,
    pub database: String,
    pub entities: Vec<SchemaEntity>,
    #[serde(default)]
    pub include_auth: bool,
}

impl GenerationRequest {
    /// Build a request from already-typed values.
    pub fn new(ecosystem: Ecosystem, database: DatabaseKind, entities: Vec<SchemaEntity>) -> Self {
        Self {
            target: ecosystem.as_str().to_string(),
            database: database.as_str().to_string(),
            entities,
            include_auth: false,
        }
    }

    pub fn with_auth(mut self, include_auth: bool) -> Self {
        self.include_auth = include_auth;
        self
    }
}

/// A request whose target and database have been resolved and whose
/// entities passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub ecosystem: Ecosystem,
    pub database: DatabaseKind,
    pub entities: Vec<SchemaEntity>,
    pub include_auth: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn test_new_uses_canonical_names() {
        let request = GenerationRequest::new(
            Ecosystem::Express,
            DatabaseKind::Mongodb,
            vec![SchemaEntity::new("users")],
        );
        assert_eq!(request.target, "express");
        assert_eq!(request.database, "mongodb");
        assert!(!request.include_auth);
        assert!(request.with_auth(true).include_auth);
    }

    #[test]
    fn test_deserialize_boundary_json() {
        let json = r#"{
            "target": "graphql",
            "database": "mysql",
            "entities": [
                {"name": "orders", "fields": [{"name": "total", "type": "number"}]}
            ]
        }"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.target, "graphql");
        assert!(!request.include_auth);
        assert_eq!(request.entities[0].fields, vec![Field::new("total", "number")]);
    }
}
