use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster_data::{Insert, Member, Query, Team, TeamFilter};
use roster_db::{schema, Connection};

#[derive(Parser, Debug)]
#[clap(name = "roster-setup")]
struct Cli {
    #[clap(env = "ROSTER_DB", default_value = "roster.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the schema
    Init,
    /// Insert two teams with two members each
    Seed,
}

/// Initialize the database
async fn db_init(filename: &str) -> Result<()> {
    let conn = Connection::open(filename).await?;
    schema::install(&conn).await?;

    Ok(())
}

/// Insert the sample teams and members, once
async fn db_seed(conn: &Connection) -> Result<()> {
    schema::install(conn).await?;

    let existing: Vec<Team> = conn
        .query(&TeamFilter {
            name: Some("teamA".to_string()),
            ..Default::default()
        })
        .await?;
    if !existing.is_empty() {
        tracing::info!("sample teams exist, skipping seed");
        return Ok(());
    }

    let team_a = conn.insert(Team::new("teamA")).await?;
    let team_b = conn.insert(Team::new("teamB")).await?;
    let members = [
        ("member1", 10, &team_a),
        ("member2", 20, &team_a),
        ("member3", 30, &team_b),
        ("member4", 40, &team_b),
    ];
    for (username, age, team) in members {
        let member = conn.insert(Member::new(username, age, Some(team))).await?;
        tracing::info!(id = member.id, username, team = %team.name, "seeded member");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster=info,sqlx=warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init => db_init(&cli.db).await?,
        Command::Seed => db_seed(&Connection::open(&cli.db).await?).await?,
    }
    Ok(())
}
