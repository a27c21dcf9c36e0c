use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use roster_data::{Insert, Query, Team, TeamFilter};
use roster_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Teams {
    /// List teams
    #[clap(name = "list")]
    List(ListTeams),
    /// Add a team
    #[clap(name = "add")]
    Add(AddTeam),
}

impl Teams {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Teams::List(cmd) => cmd.run(db).await,
            Teams::Add(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListTeams {
    #[clap(short, long)]
    pub name: Option<String>,
}

impl ListTeams {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let teams: Vec<Team> = db
            .query(&TeamFilter {
                name: self.name,
                ..Default::default()
            })
            .await?;
        println!("{} teams.", teams.len());
        teams.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddTeam {
    #[clap(short, long)]
    pub name: String,
}

impl AddTeam {
    /// Add a team, unless the name is taken
    pub async fn run(self, db: &Connection) -> Result<()> {
        let teams: Vec<Team> = db
            .query(&TeamFilter {
                name: Some(self.name.clone()),
                ..Default::default()
            })
            .await?;
        if !teams.is_empty() {
            return Err(anyhow!("Team {} already exists.", self.name));
        }

        let team = db.insert(Team::new(self.name)).await?;
        println!("Team added with id {}.", team.id);
        Ok(())
    }
}
