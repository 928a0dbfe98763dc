//! Operator CLI for status-service.
//!
//! Talks to PostgreSQL directly, so tokens can be issued before the HTTP
//! service is reachable.
//!
//! ```bash
//! admin token create --name backoffice --user 2f1c6a1e-...   # prints the raw token once
//! admin token list
//! admin token revoke backoffice                              # or the numeric id
//! admin stats
//! admin db check
//! admin db info
//! ```
//!
//! Reads the same `DATABASE_URL` / `DB_*` variables as the server.
//! `token create` additionally needs the server's `TOKEN_SIGNING_SECRET`.

use status_service::application::services::hash_token;
use status_service::config::{AuthConfig, DatabaseConfig, mask_connection_string};
use status_service::domain::repositories::{ApiToken, TokenRepository};
use status_service::infrastructure::persistence::PgTokenRepository;
use status_service::server::connect_pool;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rand::Rng;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 48;

#[derive(Parser)]
#[command(name = "admin", author, version, about = "Manage status-service tokens and database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Issue, list and revoke API tokens
    Token {
        #[command(subcommand)]
        action: TokenCommand,
    },

    /// Count statuses and active tokens
    Stats,

    /// Database connectivity and migration state
    Db {
        #[command(subcommand)]
        action: DbCommand,
    },
}

#[derive(Subcommand)]
enum TokenCommand {
    /// Issue a token acting as a user
    Create {
        /// Display name, unique across tokens
        #[arg(short, long)]
        name: Option<String>,

        /// User id recorded as creator/updater of statuses written with this token
        #[arg(short, long)]
        user: Option<Uuid>,

        /// Use this raw value instead of generating one
        #[arg(short, long)]
        token: Option<String>,

        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show every token, revoked ones included
    List,

    /// Revoke a token by name or numeric id
    Revoke { name_or_id: String },
}

#[derive(Subcommand)]
enum DbCommand {
    /// Run a trivial query
    Check,

    /// Server version and applied migrations
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let db = DatabaseConfig::from_env()?;
    let pool = connect_pool(&db).await?;

    match cli.command {
        Command::Token { action } => {
            let repo = PgTokenRepository::new(Arc::new(pool));
            match action {
                TokenCommand::Create {
                    name,
                    user,
                    token,
                    yes,
                } => create_token(&repo, name, user, token, yes).await,
                TokenCommand::List => list_tokens(&repo).await,
                TokenCommand::Revoke { name_or_id } => revoke_token(&repo, &name_or_id).await,
            }
        }
        Command::Stats => print_stats(&pool).await,
        Command::Db { action } => match action {
            DbCommand::Check => db_check(&pool, &db).await,
            DbCommand::Info => db_info(&pool).await,
        },
    }
}

fn heading(title: &str) {
    println!("{}\n", title.bright_blue().bold());
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    if !confirmed {
        println!("{}", "Cancelled".red());
    }
    Ok(confirmed)
}

fn prompt_user_id() -> Result<Uuid> {
    let raw: String = Input::new()
        .with_prompt("User id (UUID)")
        .interact_text()?;
    raw.trim().parse().context("User id must be a UUID")
}

async fn create_token(
    repo: &PgTokenRepository,
    name: Option<String>,
    user: Option<Uuid>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let auth = AuthConfig::from_env()?;
    if auth.token_signing_secret.trim().is_empty() {
        bail!("TOKEN_SIGNING_SECRET must not be empty");
    }

    heading("Create API token");

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Token name").interact_text()?,
    };
    let user_id = match user {
        Some(id) => id,
        None => prompt_user_id()?,
    };
    if user_id.is_nil() {
        bail!("User id must not be the nil UUID");
    }
    let raw = token.unwrap_or_else(generate_token);

    println!("  Name:  {}", name.cyan());
    println!("  User:  {}", user_id.to_string().cyan());
    println!("  Token: {}", raw.bright_yellow().bold());
    println!(
        "\n{}\n",
        "The token is shown only once; store it now.".red().bold()
    );

    if !skip_confirm && !confirm("Create this token?", true)? {
        return Ok(());
    }

    let created = repo
        .create_token(&name, &hash_token(&auth.token_signing_secret, &raw), user_id)
        .await
        .context("Failed to create token")?;

    println!(
        "{} (id {})\n",
        "Token created".green().bold(),
        created.id.to_string().bright_black()
    );
    println!(
        "  curl -X POST http://localhost:3000/api/v1/status \\\n    -H \"{}: Bearer {}\" \\\n    -H \"Content-Type: application/json\" \\\n    -d '{{\"name\":\"estimate\",\"description\":\"Waiting for an estimate\"}}'\n",
        "Authorization".bright_cyan(),
        raw.bright_yellow()
    );

    Ok(())
}

fn token_row(token: &ApiToken) -> String {
    let state = if token.is_revoked() {
        "REVOKED".red()
    } else {
        "ACTIVE".green()
    };
    let last_used = token
        .last_used_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "  {:<6} {:<24} {:<36} {:<17} {:<17} {}",
        token.id,
        token.name,
        token.user_id,
        token.created_at.format("%Y-%m-%d %H:%M").to_string(),
        last_used,
        state
    )
}

async fn list_tokens(repo: &PgTokenRepository) -> Result<()> {
    heading("API tokens");

    let tokens = repo.list_tokens().await.context("Failed to list tokens")?;
    if tokens.is_empty() {
        println!("  {}", "No tokens yet; create one with `admin token create`".yellow());
        return Ok(());
    }

    let header = format!(
        "  {:<6} {:<24} {:<36} {:<17} {:<17} {}",
        "ID", "Name", "User", "Created", "Last used", "State"
    );
    println!("{}", header.bright_white().bold());
    println!("  {}", "-".repeat(header.len()).bright_black());

    for token in &tokens {
        println!("{}", token_row(token));
    }

    let active = tokens.iter().filter(|t| !t.is_revoked()).count();
    println!("\n  {} total, {} active\n", tokens.len(), active.to_string().green());

    Ok(())
}

/// Numeric input is treated as an id, anything else as an exact name.
async fn revoke_token(repo: &PgTokenRepository, name_or_id: &str) -> Result<()> {
    heading("Revoke API token");

    let found = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(name_or_id).await,
    }
    .context("Failed to look up token")?;

    let Some(token) = found else {
        bail!("No token named or numbered '{name_or_id}'");
    };

    if token.is_revoked() {
        println!("{}", "Token is already revoked".yellow());
        return Ok(());
    }

    println!("{}\n", token_row(&token));

    if !confirm("Revoke this token?", false)? {
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .context("Failed to revoke token")?;

    println!("{}\n", "Token revoked".green().bold());
    Ok(())
}

async fn print_stats(pool: &PgPool) -> Result<()> {
    heading("Statistics");

    let (live, deleted): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE deleted_at IS NULL), \
                COUNT(*) FILTER (WHERE deleted_at IS NOT NULL) \
         FROM status",
    )
    .fetch_one(pool)
    .await?;

    let tokens: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!("  Statuses:         {}", live.to_string().bright_green().bold());
    println!("  Deleted statuses: {}", deleted.to_string().bright_black());
    println!("  Active tokens:    {}\n", tokens.to_string().bright_green().bold());

    Ok(())
}

async fn db_check(pool: &PgPool, db: &DatabaseConfig) -> Result<()> {
    println!(
        "Checking {} ...",
        mask_connection_string(&db.url).bright_blue()
    );
    sqlx::query("SELECT 1").execute(pool).await?;
    println!("{}", "Database connection OK".green().bold());
    Ok(())
}

async fn db_info(pool: &PgPool) -> Result<()> {
    heading("Database");

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    // `_sqlx_migrations` exists only once the server has started at least once.
    let migrations: Option<i64> =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await
            .ok();

    println!("  PostgreSQL: {}", version.bright_white());
    match migrations {
        Some(count) => println!("  Migrations: {}", count.to_string().bright_white()),
        None => println!("  Migrations: {}", "not applied".yellow()),
    }
    println!();

    Ok(())
}

/// 48 alphanumeric characters, roughly 286 bits of entropy.
fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}
