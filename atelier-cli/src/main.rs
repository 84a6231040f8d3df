// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Atelier CLI - query the studio site API from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! atelier projects
//!
//! # Projects in one category
//! atelier projects --category Branding
//!
//! # A single project or service
//! atelier project 3
//! atelier service "Web Design"
//!
//! # Team, JSON output
//! atelier team --format json --pretty
//!
//! # Replay a scripted cursor interaction
//! atelier cursor-demo
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{cursor_demo, projects, services, team};

// ============================================================================
// CLI Definition
// ============================================================================

/// Atelier CLI - studio site resources from the command line.
#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Query the Atelier studio site API")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Base URL of the site API.
    #[arg(
        long,
        global = true,
        env = "ATELIER_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub base_url: String,

    /// Verbose output (show debug logs).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered by category.
    Projects {
        /// Category to filter by (case-insensitive).
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Show a single project by id.
    Project {
        /// Project id (numeric).
        id: String,
    },
    /// List services.
    Services,
    /// Show a single service by title (case-insensitive).
    Service {
        /// Service title.
        title: String,
    },
    /// List team members.
    Team,
    /// Replay a scripted cursor interaction and print the transitions.
    CursorDemo,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON.
    Json,
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    match &cli.command {
        Commands::Projects { category } => projects::list(&cli, category.as_deref()).await,
        Commands::Project { id } => projects::show(&cli, id).await,
        Commands::Services => services::list(&cli).await,
        Commands::Service { title } => services::show(&cli, title).await,
        Commands::Team => team::list(&cli).await,
        Commands::CursorDemo => cursor_demo::run(&cli),
    }
}
