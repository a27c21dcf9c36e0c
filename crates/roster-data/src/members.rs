use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Query, Retrieve, Team};

/// Ordering of member listings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberOrder {
    /// Insertion order
    #[default]
    Id,
    /// Oldest first, then by username with missing
    /// usernames at the end
    AgeDescUsernameAsc,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberFilter {
    pub id: Option<u32>,
    pub username: Option<String>,
    pub team_id: Option<u32>,
    pub order: MemberOrder,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<u32>,
}

impl Member {
    /// Create a new, not yet persisted member
    pub fn new(username: impl Into<String>, age: i32, team: Option<&Team>) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: team.map(|t| t.id),
            ..Default::default()
        }
    }

    /// Move the member into another team
    pub fn change_team(&mut self, team: &Team) {
        self.team_id = Some(team.id);
    }

    /// Get the team of the member, if any
    pub async fn get_team<DB>(&self, db: &DB) -> Result<Option<Team>>
    where
        DB: Retrieve<Team, Key = u32> + Sync,
    {
        match self.team_id {
            Some(team_id) => Ok(Some(db.retrieve(team_id).await?)),
            None => Ok(None),
        }
    }

    /// Display name; members may be stored without username
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("-")
    }
}

impl Team {
    /// Get all members of the team
    pub async fn get_members<DB>(&self, db: &DB) -> Result<Vec<Member>>
    where
        DB: Query<Member, Filter = MemberFilter> + Sync,
    {
        let members = db
            .query(&MemberFilter {
                team_id: Some(self.id),
                ..Default::default()
            })
            .await?;
        Ok(members)
    }
}
