//! CLI administration tool for shortify.
//!
//! Inspects the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//!
//! # List short URLs, newest first
//! cargo run --bin admin -- urls list --page 2 --limit 20
//!
//! # Show a single short URL
//! cargo run --bin admin -- urls show 100680ad
//!
//! # Totals
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `BASE_URL` (optional): prefix used when printing short URLs

use shortify::application::services::{DEFAULT_PAGE_LIMIT, UrlPage, page_window};
use shortify::config::{Config, mask_connection_string};
use shortify::domain::repositories::ShortUrlRepository;
use shortify::infrastructure::persistence::PgShortUrlRepository;
use shortify::utils::code_generator::is_well_formed_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting the shortify store.
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
    /// Inspect short URLs
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UrlsAction {
    /// List short URLs, newest first
    List {
        /// Page number (starting at 1)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Records per page (1-100)
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: i64,
    },

    /// Show one short URL by code
    Show {
        /// The 8-character short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;
    let base_url = std::env::var("BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string();

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, &pool, &base_url).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short URL inspection commands.
async fn handle_urls_action(action: UrlsAction, pool: &PgPool, base_url: &str) -> Result<()> {
    let repo = PgShortUrlRepository::new(Arc::new(pool.clone()));

    match action {
        UrlsAction::List { page, limit } => list_urls(&repo, page, limit, base_url).await,
        UrlsAction::Show { code } => show_url(&repo, &code, base_url).await,
    }
}

/// Lists one page of short URLs.
///
/// # Output Format
///
/// ```text
/// Short URLs (page 1 of 3, 23 total)
///
///   Code      Clicks  Created           Original URL
///   ────────────────────────────────────────────────────────────────
///   100680ad       5  2026-01-15 10:30  https://example.com
/// ```
async fn list_urls(
    repo: &PgShortUrlRepository,
    page: i64,
    limit: i64,
    base_url: &str,
) -> Result<()> {
    let (page, limit, offset) = page_window(page, limit);

    let (records, total) = repo
        .list_page(offset, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    let UrlPage {
        records,
        total,
        page,
        total_pages,
        ..
    } = UrlPage::new(records, total, page, limit);

    println!(
        "{}",
        format!("Short URLs (page {page} of {total_pages}, {total} total)")
            .bright_blue()
            .bold()
    );
    println!();

    if records.is_empty() {
        println!("{}", "  No short URLs on this page".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:>6}  {:<16}  {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<9} {:>6}  {:<16}  {}",
            record.short_code.cyan(),
            record.clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!("  Short URLs are served at {}/<code>", base_url.bright_cyan());
    println!();

    Ok(())
}

/// Shows a single short URL.
async fn show_url(repo: &PgShortUrlRepository, code: &str, base_url: &str) -> Result<()> {
    if !is_well_formed_code(code) {
        println!(
            "{}",
            format!("'{code}' does not look like a short code (8 lowercase hex characters)")
                .yellow()
        );
    }

    let record = repo
        .find_by_short_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Short code '{code}' not found"))?;

    println!("{}", "Short URL".bright_blue().bold());
    println!();
    println!("  Code:      {}", record.short_code.cyan());
    println!("  Short URL: {}/{}", base_url, record.short_code);
    println!("  Original:  {}", record.original_url);
    println!("  Clicks:    {}", record.clicks.to_string().bright_green().bold());
    println!(
        "  Created:   {}",
        record.created_at.to_rfc3339().bright_black()
    );
    println!();

    Ok(())
}

/// Displays totals across the store.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM short_urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short URLs: {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:     {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let repo = PgShortUrlRepository::new(Arc::new(pool.clone()));
            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
