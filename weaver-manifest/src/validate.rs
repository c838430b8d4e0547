//! Validation utilities with source spans.

use miette::SourceSpan;
use weaver_core::validate_identifier;

use crate::{Result, SourceContext};

/// Validation context that carries source information and the path
/// through the manifest (e.g. `entities.orders`).
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: self.source,
            path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'orders'" or just "entity" at the top level.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Find the span of a `key = "value"` assignment's value.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that `name` follows the identifier grammar shared by all targets.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            None => Ok(()),
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span("name", name),
            )),
        }
    }
}

/// Find the span of a quoted value assigned to `key`.
///
/// Matches lines like `name = "orders"` or `target='flask'`. Falls back to
/// the first quoted occurrence of `value` anywhere in the source.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let quoted = [format!("\"{}\"", value), format!("'{}'", value)];

    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        let assignment = rest
            .strip_prefix(key)
            .map(str::trim_start)
            .and_then(|r| r.strip_prefix('='));

        if let Some(assignment) = assignment {
            for pattern in &quoted {
                if let Some(pos) = assignment.find(pattern.as_str()) {
                    // +1 to skip the opening quote
                    let start = offset + (line.len() - assignment.len()) + pos + 1;
                    return Some(SourceSpan::from((start, value.len())));
                }
            }
        }
        offset += line.len();
    }

    quoted
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(src: &str, span: SourceSpan) -> &str {
        &src[span.offset()..span.offset() + span.len()]
    }

    #[test]
    fn test_find_value_span() {
        let src = "[project]\ntarget = \"flask\"\n\n[[entities]]\nname = \"orders\"\n";
        let span = find_value_span(src, "name", "orders").unwrap();
        assert_eq!(slice(src, span), "orders");

        let span = find_value_span(src, "target", "flask").unwrap();
        assert_eq!(slice(src, span), "flask");
    }

    #[test]
    fn test_find_value_span_single_quotes_and_indent() {
        let src = "[[entities]]\n  name='line_items'\n";
        let span = find_value_span(src, "name", "line_items").unwrap();
        assert_eq!(slice(src, span), "line_items");
    }

    #[test]
    fn test_find_value_span_skips_other_keys() {
        let src = "[[entities.fields]]\ntype = \"orders\"\n[[entities]]\nname = \"orders\"\n";
        let span = find_value_span(src, "name", "orders").unwrap();
        assert_eq!(span.offset(), src.rfind("orders").unwrap());
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("[project]\n", "name", "orders").is_none());
    }

    #[test]
    fn test_context_for_nested_path() {
        let source = SourceContext::new("", "weaver.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("entity"), "entity");
        assert_eq!(ctx.push("orders").context_for("field"), "field in 'orders'");
    }

    #[test]
    fn test_validate_name() {
        let source = SourceContext::new("[[entities]]\nname = \"2fa\"\n", "weaver.toml");
        let ctx = ParseContext::new(&source);
        assert!(ctx.validate_name("orders", "entity").is_ok());

        let err = ctx.validate_name("2fa", "entity").unwrap_err();
        assert_eq!(err.to_string(), "invalid entity name '2fa'");
    }
}
