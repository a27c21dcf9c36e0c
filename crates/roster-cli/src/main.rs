use anyhow::Result;
use tracing_subscriber::EnvFilter;

use roster_cli::cli::{Cli, Command};
use roster_db::Connection;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster=info,sqlx=warn")),
        )
        .init();

    let cli = Cli::init();

    let conn = Connection::open(&cli.db).await?;
    match cli.command {
        Command::Members(cmd) => cmd.run(&conn).await,
        Command::Teams(cmd) => cmd.run(&conn).await,
        Command::Search(cmd) => cmd.run(&conn).await,
        Command::Stats(cmd) => cmd.run(&conn).await,
        Command::Bulk(cmd) => cmd.run(&conn).await,
    }?;

    Ok(())
}
