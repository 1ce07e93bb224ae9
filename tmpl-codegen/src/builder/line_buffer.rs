//! Ordered line accumulation for template output.

const INDENT: &str = "\t";

/// Fluent, append-only buffer of output lines, indented one tab per level.
///
/// Lines are kept in insertion order, which is the literal output order.
/// Nothing is ever reordered or deduplicated.
///
/// # Example
///
/// ```
/// use tmpl_codegen::builder::LineBuffer;
///
/// let lines = LineBuffer::default()
///     .line("int main(int argc, char * argv[])")
///     .block_with_close("{", "}", |b| b.blank().line("return 0;"))
///     .build();
///
/// assert_eq!(
///     lines,
///     ["int main(int argc, char * argv[])", "{", "", "\treturn 0;", "}"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    indent_level: usize,
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        let mut line = INDENT.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Add `n` blank lines.
    pub fn blanks(self, n: usize) -> Self {
        (0..n).fold(self, |b, _| b.blank())
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

    /// Add a block with a closing line, indenting everything in between.
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

    /// Consume the buffer and return the lines.
    pub fn build(self) -> Vec<String> {
        self.lines
    }
}
