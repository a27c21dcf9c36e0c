use anyhow::Result;
use clap::Args;

use roster_data::{MemberSearchCondition, MemberTeam, PageRequest, Search};
use roster_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct SearchMembers {
    #[clap(short, long)]
    pub username: Option<String>,
    /// Team name
    #[clap(short, long)]
    pub team: Option<String>,
    /// Minimum age
    #[clap(long)]
    pub age_goe: Option<i32>,
    /// Maximum age
    #[clap(long)]
    pub age_loe: Option<i32>,
    /// Zero based page to show. All results are shown without it.
    #[clap(short, long)]
    pub page: Option<u64>,
    #[clap(short, long, default_value_t = 20)]
    pub size: u64,
    /// Always run the count query
    #[clap(long)]
    pub eager: bool,
    /// Print JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

impl SearchMembers {
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    pub async fn run(self, db: &Connection) -> Result<()> {
        let condition = self.condition();
        tracing::debug!(?condition, page = ?self.page, "searching members");

        let Some(page) = self.page else {
            let rows: Vec<MemberTeam> = db.search(&condition).await?;
            if self.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{} members.", rows.len());
                rows.print_formatted();
            }
            return Ok(());
        };

        let request = PageRequest::of(page, self.size)?;
        let page = if self.eager {
            db.search_page_eager(&condition, request).await?
        } else {
            db.search_page_elided(&condition, request).await?
        };
        if self.json {
            println!("{}", serde_json::to_string_pretty(&page)?);
        } else {
            page.print_formatted();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_args() {
        let cmd = SearchMembers {
            username: None,
            team: Some("teamB".to_string()),
            age_goe: Some(20),
            age_loe: Some(40),
            page: None,
            size: 20,
            eager: false,
            json: false,
        };
        let condition = cmd.condition();
        assert_eq!(condition.username, None);
        assert_eq!(condition.team_name.as_deref(), Some("teamB"));
        assert_eq!(condition.age_goe, Some(20));
        assert_eq!(condition.age_loe, Some(40));
    }
}
