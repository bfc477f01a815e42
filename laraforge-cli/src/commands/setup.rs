//! Project setup command
//!
//! Performs the one-time file drops (DB transaction middleware, response
//! helpers) and their registrations. Every drop is existence-gated and
//! every registration is idempotent, so the command is safe to run any
//! number of times. Steps are independent; failures are reported per step
//! and the command exits non-zero when any failed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use laraforge::registration::{apply_to_file, register_autoload_file, Fact};

use crate::templates;

/// Anchor for the middleware closure in `bootstrap/app.php`
const WITH_MIDDLEWARE_PATTERN: &str = r"->withMiddleware\(function \(Middleware \$middleware\) \{";

/// Relative path of the helper file, as dropped and as registered
const HELPER_PATH: &str = "app/Helpers/functions.php";

/// Set up a project with the required middleware and helpers
pub struct SetupCommand {
    root: PathBuf,
}

/// Outcome of one setup step
enum StepOutcome {
    /// Step changed the project
    Changed(&'static str),
    /// Step found nothing to do
    Unchanged(&'static str),
}

impl SetupCommand {
    /// Create a new command instance operating on `root` as project root
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Fails when any step failed; completed steps keep their side effects.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {}",
            style("Setting up project in").cyan().bold(),
            style(self.root.display()).green().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let steps: [(&str, fn(&Self) -> Result<StepOutcome>); 4] = [
            ("Creating DB transaction middleware", Self::drop_middleware),
            ("Registering middleware in bootstrap/app.php", Self::register_middleware),
            ("Creating helper functions", Self::drop_helpers),
            ("Registering helpers in composer.json", Self::register_helpers),
        ];

        let mut failed = 0_usize;
        let mut report = Vec::new();

        for (message, step) in steps {
            spinner.set_message(message.to_string());
            match step(self) {
                Ok(outcome) => report.push(Ok(outcome)),
                Err(err) => {
                    failed += 1;
                    report.push(Err((message, err)));
                }
            }
        }

        spinner.finish_and_clear();

        let helpers_added = report.iter().any(
            |entry| matches!(entry, Ok(StepOutcome::Changed(label)) if *label == HELPER_MANIFEST_DONE),
        );

        for entry in &report {
            match entry {
                Ok(StepOutcome::Changed(label)) => {
                    println!("  {} {}", style("✓").green(), label);
                }
                Ok(StepOutcome::Unchanged(label)) => {
                    println!("  {} {}", style("✓").green(), style(label).dim());
                }
                Err((message, err)) => {
                    eprintln!("  {} {message}: {err:#}", style("✗").red());
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} setup step(s) failed; completed steps were kept");
        }

        println!(
            "\n{}",
            style("✓ Project setup completed successfully!").green().bold()
        );
        if helpers_added {
            println!(
                "\n  Run {} to pick up the new autoload entry.",
                style("composer dump-autoload").yellow()
            );
        }

        Ok(())
    }

    /// Drop the DB transaction middleware if it does not exist yet
    fn drop_middleware(&self) -> Result<StepOutcome> {
        if self.drop_file(
            "app/Http/Middleware/DBTransaction.php",
            templates::DB_TRANSACTION_MIDDLEWARE,
        )? {
            Ok(StepOutcome::Changed("DBTransaction middleware created"))
        } else {
            Ok(StepOutcome::Unchanged("DBTransaction middleware already exists"))
        }
    }

    /// Register the middleware inside the bootstrap middleware closure
    ///
    /// The bootstrap file must pre-exist; any existing reference to the
    /// middleware class satisfies the fact.
    fn register_middleware(&self) -> Result<StepOutcome> {
        let path = self.root.join("bootstrap/app.php");
        let fact = Fact::statement(
            WITH_MIDDLEWARE_PATTERN,
            "$middleware->append(\\App\\Http\\Middleware\\DBTransaction::class);",
        )
        .with_presence("DBTransaction::class");

        let applied = apply_to_file(&path, None, &[fact])
            .with_context(|| format!("Failed to update {}", path.display()))?;
        if applied > 0 {
            Ok(StepOutcome::Changed("middleware registered in bootstrap/app.php"))
        } else {
            Ok(StepOutcome::Unchanged(
                "middleware already registered in bootstrap/app.php",
            ))
        }
    }

    /// Drop the helper functions file if it does not exist yet
    fn drop_helpers(&self) -> Result<StepOutcome> {
        if self.drop_file(HELPER_PATH, templates::HELPER_FUNCTIONS)? {
            Ok(StepOutcome::Changed("helper functions created"))
        } else {
            Ok(StepOutcome::Unchanged("helper functions already exist"))
        }
    }

    /// Ensure the helper file is in the manifest's autoload list
    fn register_helpers(&self) -> Result<StepOutcome> {
        let path = self.root.join("composer.json");
        let added = register_autoload_file(&path, HELPER_PATH)
            .with_context(|| format!("Failed to update {}", path.display()))?;
        if added {
            Ok(StepOutcome::Changed(HELPER_MANIFEST_DONE))
        } else {
            Ok(StepOutcome::Unchanged(
                "helper functions already registered in composer.json",
            ))
        }
    }

    /// Write a file drop if absent; returns whether it was created
    fn drop_file(&self, relative: &str, stub: &str) -> Result<bool> {
        let path = self.root.join(relative);
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, stub)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(true)
    }
}

/// Label for the manifest registration step, matched to trigger the
/// dump-autoload reminder
const HELPER_MANIFEST_DONE: &str = "helper functions registered in composer.json";
