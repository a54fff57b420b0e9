//! Schema migration tool
//!
//! Reads the same `API_DATABASE__*` settings as the server.
//!
//! ```bash
//! cargo run --bin qa-migrate -- up
//! cargo run --bin qa-migrate -- down
//! cargo run --bin qa-migrate -- --database-url postgres://localhost/qa status
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};

use infra_db::{create_pool, migration_status, revert_last_migration, run_migrations, DatabaseSettings};
use interface_api::config::ApiConfig;
use interface_api::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "qa-migrate")]
#[command(about = "Apply, revert or inspect the Q&A database schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Connection string; overrides API_DATABASE__* settings
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply every pending migration
    Up,
    /// Revert the most recently applied migration
    Down,
    /// List migrations and whether each is applied
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config);

    let settings = match cli.database_url {
        Some(url) => DatabaseSettings::from_url(url),
        None => config.database,
    };
    let pool = create_pool(&settings)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Up => run_migrations(&pool).await?,
        Command::Down => match revert_last_migration(&pool).await? {
            Some(version) => println!("reverted {}", version),
            None => println!("nothing to revert"),
        },
        Command::Status => {
            for migration in migration_status(&pool).await? {
                let state = if migration.applied { "applied" } else { "pending" };
                println!("{:<16} {:<8} {}", migration.version, state, migration.description);
            }
        }
    }

    pool.close().await;
    Ok(())
}
