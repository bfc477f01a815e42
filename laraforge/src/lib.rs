//! laraforge: Laravel CRUD scaffolding primitives
//!
//! This crate holds everything the `laraforge` CLI needs that is independent
//! of the command surface:
//!
//! - **Field parsing**: the `name:type:modifier:default` mini-DSL becomes a
//!   [`FieldSpec`] sequence.
//! - **Projections**: pure functions mapping a field sequence to the text
//!   fragments the artifact templates consume (migration columns, fillable
//!   list, default attributes, validation rules, search clauses).
//! - **Template rendering**: literal placeholder substitution over opaque
//!   template resources.
//! - **Registration mutation**: idempotent, anchor-based insertion of
//!   imports, statements, and list entries into shared project files, plus
//!   structured edits to the `composer.json` manifest.
//!
//! All mutation logic operates on in-memory text and is unit-testable
//! without touching a filesystem; the thin file wrappers live next to it.

#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod inflect;
pub mod projections;
pub mod registration;
pub mod render;

pub use error::{Error, Result};
pub use field::{parse_fields, FieldModifier, FieldSpec, FieldType};
pub use registration::{Anchor, Fact};
