use anyhow::Context;
use clap::Parser;
use trivia_api::configuration::get_configuration;
use trivia_api::db;
use trivia_api::server::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Apply database migrations and exit
    #[clap(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = get_configuration().context("Failed to load configuration")?;
    let pool = db::establish_connection(&settings.database_url)
        .await
        .with_context(|| format!("Cannot connect to {}", settings.database_url))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;
    if cli.migrate_only {
        return Ok(());
    }

    run_server(pool, &settings).await
}
