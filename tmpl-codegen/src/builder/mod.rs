//! Template building blocks.
//!
//! - [`LineBuffer`] - Fluent, ordered accumulation of output lines

mod line_buffer;

pub use line_buffer::LineBuffer;
