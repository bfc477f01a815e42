//! CRUD scaffold generator orchestrator
//!
//! Coordinates the six artifact emitters for one model: each selects a
//! template resource, assembles the placeholder context from the model name
//! and the projections, renders, and reports a [`GeneratedFile`] with its
//! computed path. Writing is the command's responsibility.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

use laraforge::{inflect, parse_fields, projections, render, FieldSpec};

use crate::templates;

/// CRUD scaffold generator
pub struct ScaffoldGenerator {
    /// Model name (e.g., "Post", "UserProfile")
    model_name: String,
    /// Parsed field definitions, in input order
    fields: Vec<FieldSpec>,
}

impl ScaffoldGenerator {
    /// Create a new scaffold generator
    ///
    /// # Errors
    ///
    /// Fails when the model name is not PascalCase, when no field tokens
    /// are supplied, or when a field token is malformed.
    pub fn new(model_name: String, field_tokens: &[String]) -> Result<Self> {
        if !model_name.chars().next().unwrap_or('0').is_uppercase() {
            anyhow::bail!(
                "Model name must be PascalCase (start with uppercase): '{}'",
                model_name
            );
        }

        let fields =
            parse_fields(field_tokens).context("Failed to parse field definitions")?;

        Ok(Self { model_name, fields })
    }

    /// The model name this generator scaffolds
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Placeholder context shared by every artifact template
    ///
    /// Derived values (variable name, table name) are computed from the
    /// model name here and nowhere else.
    fn metadata(&self) -> serde_json::Value {
        json!({
            "model_name": self.model_name,
            "model_variable": inflect::variable_name(&self.model_name),
            "table_name": inflect::table_name(&self.model_name),
            "fields": projections::migration_fields(&self.fields),
            "fillable": projections::fillable_list(&self.fields),
            "defaults": projections::default_attributes(&self.fields),
            "search_fields": projections::search_clauses(&self.fields),
            "validation_rules": projections::validation_rules(&self.fields, false),
            "validation_update_rules": projections::validation_rules(&self.fields, true),
        })
    }

    /// Generate all CRUD artifacts, in emission order
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let metadata = self.metadata();

        Ok(vec![
            self.generate_migration(&metadata)?,
            self.generate_model(&metadata)?,
            self.generate_interface(&metadata)?,
            self.generate_repository(&metadata)?,
            self.generate_service(&metadata)?,
            self.generate_controller(&metadata)?,
        ])
    }

    fn generate_migration(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        let table_name = inflect::table_name(&self.model_name);
        let timestamp = chrono::Local::now().format("%Y_%m_%d_%H%M%S");
        let path = PathBuf::from(format!(
            "database/migrations/{timestamp}_create_{table_name}_table.php"
        ));

        Ok(GeneratedFile {
            path,
            content: render::render(templates::MIGRATION, metadata)?,
            description: format!("migration for {table_name} table"),
        })
    }

    fn generate_model(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!("app/Models/{}.php", self.model_name)),
            content: render::render(templates::MODEL, metadata)?,
            description: format!("Eloquent model for {}", self.model_name),
        })
    }

    fn generate_interface(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!(
                "app/Repositories/Interfaces/{}RepositoryInterface.php",
                self.model_name
            )),
            content: render::render(templates::INTERFACE, metadata)?,
            description: format!("repository interface for {}", self.model_name),
        })
    }

    fn generate_repository(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!(
                "app/Repositories/{}Repository.php",
                self.model_name
            )),
            content: render::render(templates::REPOSITORY, metadata)?,
            description: format!("repository for {}", self.model_name),
        })
    }

    fn generate_service(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!("app/Services/{}Service.php", self.model_name)),
            content: render::render(templates::SERVICE, metadata)?,
            description: format!("service for {}", self.model_name),
        })
    }

    fn generate_controller(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!(
                "app/Http/Controllers/{}Controller.php",
                self.model_name
            )),
            content: render::render(templates::CONTROLLER, metadata)?,
            description: format!("controller for {}", self.model_name),
        })
    }
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}
