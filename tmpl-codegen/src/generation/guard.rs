//! Header include guards.
//!
//! The opening lines must precede any `#include`, so they are emitted as a
//! separate step before dependencies; the closing lines are part of the
//! header body.

use crate::builder::LineBuffer;

/// `#ifndef GUARD`, `#def GUARD`, blank line.
pub fn guard_open(buf: LineBuffer, token: &str) -> LineBuffer {
    buf.line(&format!("#ifndef {}", token))
        .line(&format!("#def {}", token))
        .blank()
}

/// Blank line, `#endif // GUARD`.
pub fn guard_close(buf: LineBuffer, token: &str) -> LineBuffer {
    buf.blank().line(&format!("#endif // {}", token))
}
