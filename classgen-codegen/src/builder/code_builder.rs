//! Code builder utility for generating properly indented code.

use super::{Indent, LineEnding};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use classgen_codegen::builder::{CodeBuilder, Indent, LineEnding};
///
/// let code = CodeBuilder::new(Indent::PHP, LineEnding::Lf)
///     .line("function hello() {")
///     .indent()
///     .line("echo 'Hello, world!';")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function hello() {\n    echo 'Hello, world!';\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    line_ending: LineEnding,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation and line ending.
    pub fn new(indent: Indent, line_ending: LineEnding) -> Self {
        Self {
            indent_level: 0,
            indent,
            line_ending,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use classgen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::default()
    ///     .block_with_close("class Foo {", "}", |b: CodeBuilder| {
    ///         b.line("private $_bar;")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
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

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default(), LineEnding::default())
    }
}
