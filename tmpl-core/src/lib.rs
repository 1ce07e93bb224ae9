//! Core types and utilities for the template generator.
//!
//! This crate provides the file-kind classification, filename-derived
//! names and the line-oriented file writer shared by the generator and
//! the `template` binary.

mod error;
mod file;
mod filename;
mod types;
mod utils;

// Errors
pub use error::{Error, Result};
// File operations
pub use file::{File, write_lines};
// Fundamental types
pub use filename::Filename;
pub use types::FileKind;
// String utilities
pub use utils::{split_first_dot, to_guard_token};
