//! Template rendering
//!
//! Templates are opaque text resources with `{{placeholder}}` tokens.
//! Rendering is a pure transform: every supplied placeholder is replaced
//! literally (no escaping, no recursive substitution), extra context values
//! a template does not use are ignored, and writing the result to disk is
//! the caller's responsibility.
//!
//! The engine is minijinja rather than an HTML-oriented one: generated PHP
//! is full of `Namespace\{{placeholder}}` shapes, and Jinja syntax gives the
//! preceding backslash no special meaning.

use minijinja::Environment;

use crate::error::Result;

/// Render a template resource against a placeholder context
///
/// # Errors
///
/// Returns [`crate::Error::Render`] when the template source is not
/// syntactically valid for the engine.
pub fn render(template: &str, context: &serde_json::Value) -> Result<String> {
    let env = Environment::new();
    Ok(env.render_str(template, context)?)
}
