use anyhow::Result;
use clap::Args;

use roster_data::Statistics;
use roster_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct ShowStats {}

impl ShowStats {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let stats = db.age_stats().await?;
        println!();
        stats.print_formatted();
        println!();
        db.team_age_stats().await?.print_formatted();
        Ok(())
    }
}
