//! CLI administration tool for taskhub.
//!
//! Provides commands for creating users, listing short links and
//! performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version and row counts
//! cargo run --bin admin -- db info
//!
//! # Create a user interactively
//! cargo run --bin admin -- user create
//!
//! # List the most recent short links
//! cargo run --bin admin -- link list --limit 20
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL`, or `DB_HOST`,
//! `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`), plus `BASE_URL` for
//! printed short URLs.

use taskhub::application::services::SHORT_LINK_PREFIX;
use taskhub::config::{self, Config};
use taskhub::domain::calendar_date::CalendarDate;
use taskhub::domain::entities::NewUser;
use taskhub::domain::repositories::{ShortLinkRepository, TaskRepository, UserRepository};
use taskhub::infrastructure::persistence::{PgShortLinkRepository, PgTaskRepository, PgUserRepository};
use taskhub::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing taskhub.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and row counts
    Info,
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List short links, oldest first
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let pool = Arc::new(pool.clone());
            let users = PgUserRepository::new(pool.clone())
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
            let tasks = PgTaskRepository::new(pool.clone())
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count tasks: {}", e))?;
            let links = PgShortLinkRepository::new(pool.clone())
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count short links: {}", e))?;
            let contributors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks_contributors")
                .fetch_one(pool.as_ref())
                .await?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!();
            println!("  Users:        {}", users.to_string().bright_green().bold());
            println!("  Tasks:        {}", tasks.to_string().bright_green().bold());
            println!(
                "  Contributors: {}",
                contributors.to_string().bright_green().bold()
            );
            println!("  Short links:  {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create {
            name,
            email,
            birth_date,
            yes,
        } => create_user(&repo, name, email, birth_date, yes).await?,
    }

    Ok(())
}

/// Creates a user, prompting for any field not given on the command line.
async fn create_user(
    repo: &PgUserRepository,
    name: Option<String>,
    email: Option<String>,
    birth_date: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let birth_date = match birth_date {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Birth date (YYYY-MM-DD)")
            .validate_with(|input: &String| {
                CalendarDate::parse(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?,
    };
    let birth_date = CalendarDate::parse(&birth_date)?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Name:       {}", name.cyan());
    println!("  Email:      {}", email.cyan());
    println!("  Birth date: {}", birth_date.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = repo
        .create(NewUser {
            name,
            email,
            birth_date,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Dispatches short link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repo = PgShortLinkRepository::new(Arc::new(pool.clone()));

    match action {
        LinkAction::List { limit, offset } => list_links(&repo, config, limit, offset).await?,
    }

    Ok(())
}

/// Lists short links.
///
/// # Output Format
///
/// ```text
/// 🔗 Short Links
///
///   ID  Short URL                           Created           Original
///   ───────────────────────────────────────────────────────────────────
///   1   http://localhost:1337/s/aB3xZ       2024-01-15 10:30  https://example.com/page
/// ```
async fn list_links(
    repo: &PgShortLinkRepository,
    config: &Config,
    limit: i64,
    offset: i64,
) -> Result<()> {
    println!("{}", "🔗 Short Links".bright_blue().bold());
    println!();

    let links = repo
        .list(limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No short links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<36} {:<17} {}",
        "ID".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    let base = config.base_url.trim_end_matches('/');
    for link in &links {
        let short_url = format!("{}/{}/{}", base, SHORT_LINK_PREFIX, link.short_code);
        println!(
            "  {:<5} {:<36} {:<17} {}",
            link.id.to_string().bright_black(),
            short_url.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short links: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        links.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
