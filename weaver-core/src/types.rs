//! Core type definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Backing datastore of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// Relational store (MySQL).
    Mysql,
    /// Document store (MongoDB).
    Mongodb,
}

impl DatabaseKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Mongodb => "mongodb",
        }
    }

    /// Returns true for relational stores.
    pub fn is_relational(&self) -> bool {
        matches!(self, DatabaseKind::Mysql)
    }

    /// Environment variable the generated project reads its connection string from.
    pub fn url_env_var(&self) -> &'static str {
        match self {
            DatabaseKind::Mysql => "DATABASE_URL",
            DatabaseKind::Mongodb => "MONGODB_URI",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DatabaseKind::Mysql),
            "mongodb" | "mongo" => Ok(DatabaseKind::Mongodb),
            _ => Err(format!(
                "unknown database '{}', expected 'mysql' or 'mongodb'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_kind_as_str() {
        assert_eq!(DatabaseKind::Mysql.as_str(), "mysql");
        assert_eq!(DatabaseKind::Mongodb.as_str(), "mongodb");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mysql".parse::<DatabaseKind>().unwrap(), DatabaseKind::Mysql);
        assert_eq!("MySQL".parse::<DatabaseKind>().unwrap(), DatabaseKind::Mysql);
        assert_eq!("mongo".parse::<DatabaseKind>().unwrap(), DatabaseKind::Mongodb);
        assert!("postgres".parse::<DatabaseKind>().is_err());
    }

    #[test]
    fn test_is_relational() {
        assert!(DatabaseKind::Mysql.is_relational());
        assert!(!DatabaseKind::Mongodb.is_relational());
    }

    #[test]
    fn test_deserialize() {
        let db: DatabaseKind = serde_json::from_str(r#""mongodb""#).unwrap();
        assert_eq!(db, DatabaseKind::Mongodb);
    }
}
