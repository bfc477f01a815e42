//! laraforge CLI tool

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use laraforge_cli::{MakeCommand, SetupCommand};

#[derive(Parser)]
#[command(name = "laraforge")]
#[command(version)]
#[command(about = "Scaffold Laravel CRUD slices from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model, migration, repository, service, and controller for a model
    ///
    /// Examples:
    ///   laraforge make Post title:string:required body:text:nullable
    ///   laraforge make Product name:string:required price:decimal:required:0
    ///   laraforge make User email:string:required is_active:boolean:required:true
    Make {
        /// Model name (PascalCase, e.g., `Post`, `UserProfile`)
        model: String,

        /// Field definitions in format: name:type:modifier:default
        /// Supported types: string, text, integer, decimal, boolean, date, email
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
    },
    /// Set up the project: DB transaction middleware and response helpers
    Setup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("Failed to get current directory")?;

    match cli.command {
        Commands::Make { model, fields } => MakeCommand::new(model, fields, root).execute(),
        Commands::Setup => SetupCommand::new(root).execute(),
    }
}
