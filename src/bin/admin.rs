//! CLI administration tool for shorten-service.
//!
//! Inspects and maintains the mapping store without going through the HTTP
//! API.
//!
//! # Usage
//!
//! ```bash
//! # Print the code a URL would be shortened to
//! cargo run --bin admin -- code https://example.com/a
//!
//! # Show a mapping
//! cargo run --bin admin -- lookup 3f1e
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete 3f1e
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for every command except `code`): PostgreSQL connection string

use shorten_service::domain::repositories::{MappingRepository, SequenceRepository};
use shorten_service::infrastructure::persistence::{PgMappingRepository, PgSequenceRepository};
use shorten_service::server::run_migrations;
use shorten_service::utils::code_generator::{digest_hex, generate_code};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorten-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Print the short code derived from a URL
    Code {
        /// URL to derive the code for
        url: String,
    },

    /// Show the mapping for a short code
    Lookup {
        /// Short code to resolve
        code: String,
    },

    /// Delete the mapping for a short code
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Code { url } = &cli.command {
        print_code(url);
        return Ok(());
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Code { .. } => {}
        Commands::Lookup { code } => handle_lookup(&pool, &code).await?,
        Commands::Delete { code, yes } => handle_delete(&pool, &code, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints the code and full digest for a URL.
fn print_code(url: &str) {
    println!("{}", "🔗 Derived code".bright_blue().bold());
    println!();
    println!("  URL:    {}", url.cyan());
    println!("  Code:   {}", generate_code(url).bright_yellow().bold());
    println!("  Digest: {}", digest_hex(url).bright_black());
    println!();
}

/// Shows a single mapping.
async fn handle_lookup(pool: &PgPool, code: &str) -> Result<()> {
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let Some(mapping) = repo.find_by_code(code).await? else {
        println!("{}", format!("❌ No mapping for code '{code}'").red());
        return Ok(());
    };

    println!("{}", "📋 Mapping".bright_blue().bold());
    println!();
    println!("  ID:      {}", mapping.id.to_string().bright_white());
    println!("  Code:    {}", mapping.code.bright_yellow().bold());
    println!("  URL:     {}", mapping.url.cyan());
    println!("  Created: {}", mapping.created_at.to_rfc3339().bright_black());
    println!("  Updated: {}", mapping.updated_at.to_rfc3339().bright_black());
    println!();

    Ok(())
}

/// Deletes a mapping after confirmation.
async fn handle_delete(pool: &PgPool, code: &str, yes: bool) -> Result<()> {
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let Some(mapping) = repo.find_by_code(code).await? else {
        println!("{}", format!("❌ No mapping for code '{code}'").red());
        return Ok(());
    };

    println!("{}", "🗑️  Delete Mapping".bright_blue().bold());
    println!();
    println!("  Code: {}", mapping.code.bright_yellow());
    println!("  URL:  {}", mapping.url.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if repo.delete(code).await? {
        println!("{}", "✅ Mapping deleted".green().bold());
    } else {
        println!("{}", "⚠️  Mapping was already gone".yellow());
    }

    Ok(())
}

/// Displays store statistics.
///
/// Shows:
/// - Total number of mappings
/// - Current value of the id counter
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let mappings = PgMappingRepository::new(pool.clone()).count().await?;
    let counter = PgSequenceRepository::new(pool).current().await?;

    println!("  Mappings:  {}", mappings.to_string().bright_green().bold());
    println!("  Last id:   {}", counter.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            PgMappingRepository::new(Arc::new(pool.clone())).ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
