//! Core operations.
//!
//! This module contains the business logic for the template command,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod launch;

pub use generate::{GenerateOptions, generate};
pub use launch::Launcher;
