//! Names derived from the model name
//!
//! The model name is the single source of truth; the table name and the
//! lower-camel variable name are always recomputed from it and never stored.

use convert_case::{Case, Casing};
use inflector::cases::tablecase::to_table_case;

/// Pluralized, snake-cased table name: `UserProfile` -> `user_profiles`
#[must_use]
pub fn table_name(model: &str) -> String {
    to_table_case(model)
}

/// Lower-camel variable name: `UserProfile` -> `userProfile`
#[must_use]
pub fn variable_name(model: &str) -> String {
    model.to_case(Case::Camel)
}
