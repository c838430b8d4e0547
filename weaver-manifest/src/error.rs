use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the raw TOML and its filename so every error can point into
/// `weaver.toml`.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "weaver.toml");
/// ctx.validation_error_at("unknown database 'postgres'", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error pointing at `span`, when known.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn unsupported_value_error(
        &self,
        key: &'static str,
        value: impl Into<String>,
        expected: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedValue {
            src: self.named_source(),
            span,
            key,
            value: value.into(),
            expected,
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'weaver init' to create a starter weaver.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(weaver::manifest_write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' already exists")]
    #[diagnostic(help("pass --force to overwrite it"))]
    AlreadyExists { path: PathBuf },

    #[error("failed to parse weaver.toml")]
    #[diagnostic(code(weaver::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported {key} '{value}'")]
    #[diagnostic(code(weaver::unsupported_value), help("expected one of: {expected}"))]
    UnsupportedValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("not supported")]
        span: Option<SourceSpan>,
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{message}")]
    #[diagnostic(code(weaver::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(weaver::invalid_identifier),
        help(
            "{reason}. Entity and field names become module names and URL segments, so use only letters, numbers, and underscores."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: &'static str,
    },
}
