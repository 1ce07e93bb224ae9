//! Template generation steps.
//!
//! - [`guard_open`] / [`guard_close`] - Header include guards
//! - [`dependency_line`] - Include/import line formatting
//! - [`build_body`] - Fixed per-kind template bodies

mod body;
mod guard;
mod imports;

pub use body::build_body;
pub use guard::{guard_close, guard_open};
pub use imports::{dependency_line, push_dependencies};
