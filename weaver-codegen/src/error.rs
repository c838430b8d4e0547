//! Errors raised while assembling or persisting a generated project.

use std::{fmt, io};

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Why two identifiers could not coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionReason {
    /// Another entity in the request derives the same identifier.
    Duplicate,
    /// The identifier is a keyword or framework name of the target.
    Reserved,
}

impl fmt::Display for CollisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionReason::Duplicate => write!(f, "duplicate"),
            CollisionReason::Reserved => write!(f, "reserved"),
        }
    }
}

/// Boundary-level classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    UnsupportedTarget,
    IdentifierCollision,
    Render,
    ArchiveIo,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::UnsupportedTarget => "unsupported_target",
            ErrorKind::IdentifierCollision => "identifier_collision",
            ErrorKind::Render => "render",
            ErrorKind::ArchiveIo => "archive_io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error("{message}")]
    #[diagnostic(code(weaver::validation))]
    Validation { message: String },

    #[error("unsupported target '{target}'")]
    #[diagnostic(
        code(weaver::unsupported_target),
        help("supported targets are: flask, fastapi, express")
    )]
    UnsupportedTarget { target: String },

    #[error("identifier collision on '{entity}' ({reason}): {detail}")]
    #[diagnostic(
        code(weaver::identifier_collision),
        help("rename the entity or field so every derived identifier is unique and not reserved")
    )]
    IdentifierCollision {
        entity: String,
        reason: CollisionReason,
        detail: String,
    },

    #[error("render invariant violated: {message}")]
    #[diagnostic(
        code(weaver::render),
        help("this is a bug in the generator, please report it")
    )]
    Render { message: String },

    #[error("failed to persist artifact: {context}")]
    #[diagnostic(code(weaver::archive_io))]
    ArchiveIo {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl GenerationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported_target(target: impl Into<String>) -> Self {
        Self::UnsupportedTarget {
            target: target.into(),
        }
    }

    /// Two entities derive the same identifier.
    pub fn duplicate(entity: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::IdentifierCollision {
            entity: entity.into(),
            reason: CollisionReason::Duplicate,
            detail: detail.into(),
        }
    }

    /// An identifier is reserved by the target language or framework.
    pub fn reserved(entity: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::IdentifierCollision {
            entity: entity.into(),
            reason: CollisionReason::Reserved,
            detail: detail.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn archive_io(context: impl Into<String>, source: io::Error) -> Self {
        Self::ArchiveIo {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Validation { .. } => ErrorKind::Validation,
            GenerationError::UnsupportedTarget { .. } => ErrorKind::UnsupportedTarget,
            GenerationError::IdentifierCollision { .. } => ErrorKind::IdentifierCollision,
            GenerationError::Render { .. } => ErrorKind::Render,
            GenerationError::ArchiveIo { .. } => ErrorKind::ArchiveIo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            GenerationError::validation("empty").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            GenerationError::unsupported_target("graphql").kind(),
            ErrorKind::UnsupportedTarget
        );
        assert_eq!(
            GenerationError::reserved("class", "python keyword").kind(),
            ErrorKind::IdentifierCollision
        );
        assert_eq!(
            GenerationError::archive_io("write", io::Error::other("disk full")).kind(),
            ErrorKind::ArchiveIo
        );
    }

    #[test]
    fn test_messages() {
        let err = GenerationError::unsupported_target("graphql");
        assert_eq!(err.to_string(), "unsupported target 'graphql'");

        let err = GenerationError::duplicate("users", "route segment 'users' also used by 'Users'");
        assert_eq!(
            err.to_string(),
            "identifier collision on 'users' (duplicate): route segment 'users' also used by 'Users'"
        );
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        assert_eq!(ErrorKind::ArchiveIo.as_str(), "archive_io");
        assert_eq!(ErrorKind::UnsupportedTarget.to_string(), "unsupported_target");
    }
}
