use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Page, PageRequest};

/// Optional search criteria for members.
/// Only the fields which are set restrict the result.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

/// A member together with its team, if it has one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberTeam {
    pub member_id: u32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<u32>,
    pub team_name: Option<String>,
}

/// The row shape selected by member searches
pub type MemberTeamRow = (u32, Option<String>, i32, Option<u32>, Option<String>);

impl From<MemberTeamRow> for MemberTeam {
    fn from(row: MemberTeamRow) -> Self {
        let (member_id, username, age, team_id, team_name) = row;
        Self {
            member_id,
            username,
            age,
            team_id,
            team_name,
        }
    }
}

#[async_trait]
pub trait Search<T> {
    /// All matching rows
    async fn search(&self, condition: &MemberSearchCondition) -> Result<Vec<T>>;

    /// One page of matching rows. The total is always counted.
    async fn search_page_eager(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<T>>;

    /// One page of matching rows. The count query is skipped
    /// whenever the total follows from the page itself.
    async fn search_page_elided(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<T>>;
}
