use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Confirm;

use roster_data::BulkUpdate;
use roster_db::Connection;

#[derive(Subcommand, Debug)]
pub enum Bulk {
    /// Rename all members younger than the given age
    #[clap(name = "rename")]
    Rename(RenameYounger),
    /// Add to the age of every member
    #[clap(name = "add-age")]
    AddAge(AddAge),
    /// Multiply the age of every member
    #[clap(name = "multiply-age")]
    MultiplyAge(MultiplyAge),
    /// Delete all members older than the given age
    #[clap(name = "delete")]
    Delete(DeleteOlder),
}

impl Bulk {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let prompt = match &self {
            Bulk::Rename(cmd) => format!(
                "Rename all members younger than {} to {}?",
                cmd.younger_than, cmd.username
            ),
            Bulk::AddAge(cmd) => format!("Add {} to the age of all members?", cmd.delta),
            Bulk::MultiplyAge(cmd) => format!("Multiply the age of all members by {}?", cmd.factor),
            Bulk::Delete(cmd) => format!("Delete all members older than {}?", cmd.older_than),
        };
        let confirm = Confirm::new(&prompt).with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        let count = match self {
            Bulk::Rename(cmd) => db.rename_younger_than(cmd.younger_than, &cmd.username).await?,
            Bulk::AddAge(cmd) => db.add_age(cmd.delta).await?,
            Bulk::MultiplyAge(cmd) => db.multiply_age(cmd.factor).await?,
            Bulk::Delete(cmd) => db.delete_older_than(cmd.older_than).await?,
        };
        println!("{} members affected.", count);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RenameYounger {
    #[clap(long)]
    pub younger_than: i32,
    #[clap(short, long)]
    pub username: String,
}

#[derive(Args, Debug)]
pub struct AddAge {
    #[clap(short, long, allow_negative_numbers = true)]
    pub delta: i32,
}

#[derive(Args, Debug)]
pub struct MultiplyAge {
    #[clap(short, long)]
    pub factor: i32,
}

#[derive(Args, Debug)]
pub struct DeleteOlder {
    #[clap(long)]
    pub older_than: i32,
}
