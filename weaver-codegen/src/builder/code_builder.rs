//! Code builder utility for generating properly indented code.

use super::Indent;

/// Line-oriented builder for generated source files.
///
/// Every method takes `&mut self` and returns it for chaining, so renderers
/// can interleave fixed snippets with loops over entities.
///
/// # Example
///
/// ```
/// use weaver_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_line("console.log('Hello');")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// assert_eq!(code, "function main() {\n  console.log('Hello');\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line snippet at the current indentation.
    ///
    /// Empty lines stay empty so no trailing whitespace is produced.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line comment with the given prefix.
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        self.buffer.push(' ');
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_block() {
        let mut code = CodeBuilder::python();
        code.push_line("def health():")
            .push_indent()
            .push_line("return {\"status\": \"healthy\"}")
            .push_dedent()
            .push_line("app = create_app()");

        assert_eq!(
            code.build(),
            "def health():\n    return {\"status\": \"healthy\"}\napp = create_app()\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        let mut code = CodeBuilder::python();
        code.push_line("class Orders(Base):")
            .push_indent()
            .push_line("def to_dict(self):")
            .push_indent()
            .push_line("return {}");

        assert_eq!(
            code.build(),
            "class Orders(Base):\n    def to_dict(self):\n        return {}\n"
        );
    }

    #[test]
    fn test_push_lines_keeps_blank_lines_empty() {
        let mut code = CodeBuilder::python();
        code.push_indent().push_lines("a = 1\n\nb = 2");

        assert_eq!(code.build(), "    a = 1\n\n    b = 2\n");
    }

    #[test]
    fn test_comment() {
        let mut code = CodeBuilder::javascript();
        code.push_indent()
            .push_comment("//", "Routes")
            .push_line("app.use(router);");

        assert_eq!(code.build(), "  // Routes\n  app.use(router);\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }
}
