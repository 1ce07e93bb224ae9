//! Dependency line formatting.

use tmpl_core::FileKind;

use crate::builder::LineBuffer;

/// Format one dependency token as an include/import line for `kind`.
///
/// The token is inserted verbatim. Unrecognized kinds yield `None`.
pub fn dependency_line(kind: FileKind, dependency: &str) -> Option<String> {
    match kind {
        FileKind::C | FileKind::Cpp | FileKind::Header => {
            Some(format!("#include <{}>", dependency))
        }
        FileKind::Java => Some(format!("import java.{};", dependency)),
        FileKind::Unrecognized => None,
    }
}

/// Append one formatted line per dependency, in the given order.
pub fn push_dependencies<I, S>(buf: LineBuffer, kind: FileKind, dependencies: I) -> LineBuffer
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    buf.each(dependencies, |b, dep| match dependency_line(kind, dep.as_ref()) {
        Some(line) => b.line(&line),
        None => b,
    })
}
