//! CRUD scaffold generation

pub mod generator;

pub use generator::{GeneratedFile, ScaffoldGenerator};
