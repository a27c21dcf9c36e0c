use clap::{Parser, Subcommand};

use crate::commands::{Bulk, Members, SearchMembers, ShowStats, Teams};

#[derive(Parser, Debug)]
#[clap(name = "roster", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(long, env = "ROSTER_DB", default_value = "roster.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage members
    #[clap(subcommand)]
    Members(Members),
    /// Manage teams
    #[clap(subcommand)]
    Teams(Teams),
    /// Search members with their teams
    #[clap(name = "search")]
    Search(SearchMembers),
    /// Show age statistics
    #[clap(name = "stats")]
    Stats(ShowStats),
    /// Update many members at once
    #[clap(subcommand)]
    Bulk(Bulk),
}
