//! Indentation of generated code.

/// One indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// PEP 8.
    pub const PYTHON: Self = Self("    ");

    pub const JAVASCRIPT: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
