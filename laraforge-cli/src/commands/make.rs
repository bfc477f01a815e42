//! CRUD generation command
//!
//! Emits the six artifacts for a model and registers its repository binding
//! in the shared provider and config files. Every step is committed
//! independently: a failing step is reported and later steps still run;
//! nothing is rolled back. The command fails (non-zero exit) when any step
//! failed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use laraforge::inflect;
use laraforge::registration::{apply_to_file, Fact};

use crate::scaffold::{GeneratedFile, ScaffoldGenerator};
use crate::templates;

/// Anchor for the provider's `register()` body
const REGISTER_PATTERN: &str = r"public function register\(\): void\s*\{";

/// List-opening marker for the provider array in `config/app.php`
const PROVIDERS_MARKER: &str = "'providers' => ServiceProvider::defaultProviders()->merge([";

/// Generate CRUD artifacts for a model
pub struct MakeCommand {
    model: String,
    fields: Vec<String>,
    root: PathBuf,
}

impl MakeCommand {
    /// Create a new command instance operating on `root` as project root
    #[must_use]
    pub fn new(model: String, fields: Vec<String>, root: PathBuf) -> Self {
        Self {
            model,
            fields,
            root,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails before touching the filesystem when the model name or field
    /// tokens are invalid, and afterwards when any emission or registration
    /// step failed (completed steps keep their side effects).
    pub fn execute(&self) -> Result<()> {
        let generator = ScaffoldGenerator::new(self.model.clone(), &self.fields)?;

        println!(
            "\n{} {} {}",
            style("Generating CRUD for").cyan().bold(),
            style(&self.model).green().bold(),
            style("...").cyan().bold()
        );

        let files = generator
            .generate()
            .context("Failed to render artifact templates")?;

        let mut failed = 0_usize;

        for file in &files {
            match self.write_artifact(file) {
                Ok(()) => println!(
                    "  {} {} ({})",
                    style("✓").green(),
                    style(file.path.display()).dim(),
                    style(&file.description).dim()
                ),
                Err(err) => {
                    failed += 1;
                    eprintln!(
                        "  {} {}: {err:#}",
                        style("✗").red(),
                        style(file.path.display()).dim()
                    );
                }
            }
        }

        match self.update_provider() {
            Ok(true) => println!(
                "  {} {}",
                style("✓").green(),
                style("app/Providers/RepositoryServiceProvider.php (binding added)").dim()
            ),
            Ok(false) => println!(
                "  {} {}",
                style("✓").green(),
                style("app/Providers/RepositoryServiceProvider.php (already bound)").dim()
            ),
            Err(err) => {
                failed += 1;
                eprintln!("  {} provider update: {err:#}", style("✗").red());
            }
        }

        match self.register_provider() {
            Ok(true) => println!(
                "  {} {}",
                style("✓").green(),
                style("config/app.php (provider registered)").dim()
            ),
            Ok(false) => println!(
                "  {} {}",
                style("✓").green(),
                style("config/app.php (provider already registered)").dim()
            ),
            Err(err) => {
                failed += 1;
                eprintln!("  {} provider registration: {err:#}", style("✗").red());
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} step(s) failed; completed steps were kept");
        }

        let table = inflect::table_name(&self.model);
        println!(
            "\n{} CRUD for {} is ready!",
            style("✨").green().bold(),
            style(&self.model).green().bold()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Run the migration: {}",
            style("php artisan migrate").yellow()
        );
        println!(
            "  2. Register routes in routes/api.php: {}",
            style(format!(
                "Route::apiResource('{table}', {}Controller::class);",
                self.model
            ))
            .yellow()
        );

        Ok(())
    }

    /// Write one artifact, creating parent directories; always overwrites
    fn write_artifact(&self, file: &GeneratedFile) -> Result<()> {
        let full_path = self.root.join(&file.path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))
    }

    /// Splice the model's imports and binding into the shared provider,
    /// materializing it from the baseline when absent
    fn update_provider(&self) -> Result<bool> {
        let path = self.root.join("app/Providers/RepositoryServiceProvider.php");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let model = &self.model;
        let facts = vec![
            Fact::import(format!("use App\\Repositories\\{model}Repository;")),
            Fact::import(format!(
                "use App\\Repositories\\Interfaces\\{model}RepositoryInterface;"
            )),
            Fact::statement(
                REGISTER_PATTERN,
                format!(
                    "$this->app->bind({model}RepositoryInterface::class, {model}Repository::class);"
                ),
            ),
        ];

        let applied = apply_to_file(&path, Some(templates::PROVIDER), &facts)
            .with_context(|| format!("Failed to update {}", path.display()))?;
        Ok(applied > 0)
    }

    /// Register the shared provider in the application's provider list
    fn register_provider(&self) -> Result<bool> {
        let path = self.root.join("config/app.php");
        let fact = Fact::list_entry(
            PROVIDERS_MARKER,
            "App\\Providers\\RepositoryServiceProvider::class",
        );

        let applied = apply_to_file(&path, None, &[fact])
            .with_context(|| format!("Failed to update {}", path.display()))?;
        Ok(applied > 0)
    }
}
