//! Boilerplate template generation for the `template` CLI.
//!
//! # Module Organization
//!
//! - [`builder`] - Line buffer and indentation primitives
//! - [`generation`] - Header guards, dependency lines and per-kind bodies
//!
//! [`Generator`] ties these together: it classifies the filename once,
//! then emits guard, dependency and body lines in that order.

pub mod builder;
pub mod generation;
mod generator;

pub use generator::Generator;
