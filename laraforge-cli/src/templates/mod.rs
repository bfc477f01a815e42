//! Template resources for generated artifacts and setup file drops
//!
//! Each template is an opaque text blob with `{{placeholder}}` tokens,
//! rendered through [`laraforge::render`]. The artifact stubs live in
//! [`files`]; the setup drops and registration baselines live in [`setup`].

pub mod files;
pub mod setup;

pub use files::{CONTROLLER, INTERFACE, MIGRATION, MODEL, REPOSITORY, SERVICE};
pub use setup::{DB_TRANSACTION_MIDDLEWARE, HELPER_FUNCTIONS, PROVIDER};
