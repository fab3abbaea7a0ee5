//! `workforce` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`        — start the HTTP API server.
//! - `migrate`      — run pending database migrations.
//! - `reset-schema` — drop and recreate the workforce tables.
//! - `seed`         — reset the schema and fill it with fake data.

use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "workforce",
    about = "Department, employee and employment-history backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server.
    Serve {
        #[arg(long, env = "BIND", default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        /// Opaque key every request must present.
        #[arg(long, env = "API_KEY")]
        api_key: String,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Drop and recreate the workforce tables (destroys all rows).
    ResetSchema {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Reset the schema and populate it with fake rows.
    Seed {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        /// How many employees (and history rows) to create.
        #[arg(long, default_value_t = 1000)]
        employees: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            database_url,
            api_key,
        } => {
            info!("starting API server on {bind}");
            let pool = db::pool::create_pool(&database_url, 10).await?;
            let state = api::AppState { pool, api_key };
            api::serve(&bind, state).await?;
        }
        Command::Migrate { database_url } => {
            let pool = db::pool::create_pool(&database_url, 2).await?;
            db::pool::run_migrations(&pool).await?;
            info!("migrations applied");
        }
        Command::ResetSchema { database_url } => {
            let pool = db::pool::create_pool(&database_url, 2).await?;
            db::schema::reset(&pool).await?;
            info!("schema reset");
        }
        Command::Seed {
            database_url,
            employees,
        } => {
            let pool = db::pool::create_pool(&database_url, 5).await?;
            seeder::seed(&pool, employees).await?;
        }
    }

    Ok(())
}
