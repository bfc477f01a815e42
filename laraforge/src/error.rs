//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum Error {
    /// A field token could not be parsed
    #[error("malformed field token '{token}': field name is empty")]
    MalformedField {
        /// The raw token as supplied on the command line
        token: String,
    },

    /// No field tokens were supplied to generation
    #[error("no fields specified; use format: name:string:required content:text:nullable is_active:boolean:required:true")]
    MissingInput,

    /// A registration fact's structural anchor is absent from the target file
    #[error("anchor not found: {anchor}")]
    AnchorNotFound {
        /// Human-readable description of the missing anchor
        anchor: String,
    },

    /// A shared file expected to pre-exist is absent
    #[error("expected file is missing: {0}")]
    MissingTargetFile(PathBuf),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// The manifest is not valid JSON
    #[error("invalid manifest JSON: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
