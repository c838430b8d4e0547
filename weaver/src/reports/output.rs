//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where finished lines go.
pub trait Output {
    /// Write one finished line.
    fn emit(&mut self, line: String);

    /// Write one diagnostic line. Goes to the same place as [`Output::emit`]
    /// unless overridden.
    fn emit_diagnostic(&mut self, line: String) {
        self.emit(line);
    }

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.emit(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.emit(format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(format!("  - {}", text));
    }

    /// Render an added item (e.g., a written file).
    fn added_item(&mut self, text: &str) {
        self.emit(format!("  + {}", text));
    }

    /// Render a completed action.
    fn success(&mut self, msg: &str) {
        self.emit(format!("✓ {}", msg));
    }

    fn info(&mut self, msg: &str) {
        self.emit_diagnostic(format!("info: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.emit_diagnostic(format!("warning: {}", msg));
    }

    /// Render a separator with a label, e.g. before a previewed file.
    fn divider(&mut self, label: &str) {
        self.emit(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(text.to_string());
    }

    fn newline(&mut self) {
        self.emit(String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: reports on stdout, diagnostics on stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit(&mut self, line: String) {
        println!("{}", line);
    }

    fn emit_diagnostic(&mut self, line: String) {
        eprintln!("{}", line);
    }
}

/// Collects rendered lines in memory, diagnostics included.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn emit(&mut self, line: String) {
        self.lines.push(line);
    }
}
