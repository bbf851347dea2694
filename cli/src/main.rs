//! CLI entrypoint for Quiz Trainer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quiz_infrastructure::{ConfigLoader, SqliteQuizStore};
use quiz_presentation::{Cli, ConsoleInteraction, QuizRepl};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Quiz Trainer");

    // Resolve the database path: flag > config file > platform default
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    let database_path = cli.database.unwrap_or_else(|| config.database_path());

    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    // === Dependency Injection ===
    let database_url = format!("sqlite://{}?mode=rwc", database_path.display());
    let store = SqliteQuizStore::connect(&database_url)
        .await
        .with_context(|| format!("opening {}", database_path.display()))?;
    store.migrate().await.context("migrating quiz schema")?;
    store.seed_if_empty().await.context("seeding quiz store")?;
    info!(database = %database_path.display(), "quiz store ready");

    let interaction = Arc::new(ConsoleInteraction::new()?);
    let repl = QuizRepl::new(Arc::new(store), interaction);

    repl.run().await?;

    Ok(())
}
