//! CLI command implementations

pub mod make;
pub mod setup;

pub use make::MakeCommand;
pub use setup::SetupCommand;
