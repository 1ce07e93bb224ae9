//! Fixed template bodies, one per file kind.

use tmpl_core::{FileKind, Filename};

use super::guard::guard_close;
use crate::builder::LineBuffer;

/// Append the template body for `kind` after the dependency lines.
pub fn build_body(buf: LineBuffer, kind: FileKind, filename: &Filename) -> LineBuffer {
    match kind {
        FileKind::C => c_family_body(buf, false),
        FileKind::Cpp => c_family_body(buf, true),
        FileKind::Header => guard_close(buf, &filename.guard_token()),
        FileKind::Java => java_body(buf, filename.base_name()),
        FileKind::Unrecognized => buf,
    }
}

fn c_family_body(buf: LineBuffer, using_std: bool) -> LineBuffer {
    buf.when(using_std, |b| b.blank().line("using namespace std;"))
        .blank()
        .line("int main(int argc, char * argv[])")
        .block_with_close("{", "}", |b| b.blank().line("return 0;"))
}

fn java_body(buf: LineBuffer, class_name: &str) -> LineBuffer {
    buf.blank()
        .block_with_close(&format!("public class {} {{", class_name), "}", |b| {
            b.blank()
                .block_with_close("public static void main(String[] args) {", "}", |b| {
                    b.blanks(4)
                })
        })
}
