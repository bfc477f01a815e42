//! laraforge CLI library
//!
//! The binary is a thin clap dispatcher; everything it does lives here so
//! integration tests can drive the commands against temporary project
//! trees.

#![forbid(unsafe_code)]

pub mod commands;
pub mod scaffold;
pub mod templates;

pub use commands::{MakeCommand, SetupCommand};
pub use scaffold::{GeneratedFile, ScaffoldGenerator};
