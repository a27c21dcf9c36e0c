use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use roster_data::{
    page_from, MemberSearchCondition, MemberTeam, MemberTeamRow, Page, PageRequest, Predicate,
    Predicates, Search,
};

use crate::Connection;

const SELECT_MEMBER_TEAM: &str = r#"
    SELECT
        m.id AS member_id,
        m.username,
        m.age,
        t.id AS team_id,
        t.name AS team_name
    FROM members m
    LEFT JOIN teams t ON m.team_id = t.id
    WHERE 1
    "#;

/// Append the conjunction to a query ending in a `WHERE` clause
fn push_predicates(qry: &mut QueryBuilder<'_, Sqlite>, predicates: &Predicates) {
    for predicate in predicates.iter() {
        match predicate {
            Predicate::UsernameEq(username) => {
                qry.push(" AND m.username = ").push_bind(username.clone());
            }
            Predicate::TeamNameEq(name) => {
                qry.push(" AND t.name = ").push_bind(name.clone());
            }
            Predicate::AgeGoe(age) => {
                qry.push(" AND m.age >= ").push_bind(*age);
            }
            Predicate::AgeLoe(age) => {
                qry.push(" AND m.age <= ").push_bind(*age);
            }
        }
    }
}

impl Connection {
    /// Fetch the projected rows, optionally restricted to a window
    async fn fetch_member_teams(
        &self,
        predicates: &Predicates,
        window: Option<PageRequest>,
    ) -> Result<Vec<MemberTeam>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(SELECT_MEMBER_TEAM);
        push_predicates(&mut qry, predicates);
        qry.push(" ORDER BY m.id");
        if let Some(window) = window {
            qry.push(" LIMIT ")
                .push_bind(i64::try_from(window.limit())?)
                .push(" OFFSET ")
                .push_bind(i64::try_from(window.offset())?);
        }
        tracing::debug!(sql = qry.sql(), "fetching member teams");

        let rows: Vec<MemberTeamRow> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(MemberTeam::from).collect())
    }

    /// Count all matching members. The team is only joined
    /// if one of the predicates looks at it.
    async fn count_member_teams(&self, predicates: &Predicates) -> Result<u64> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new("SELECT COUNT(m.id) FROM members m");
        if predicates.references_team() {
            qry.push(" LEFT JOIN teams t ON m.team_id = t.id");
        }
        qry.push(" WHERE 1");
        push_predicates(&mut qry, predicates);
        tracing::debug!(sql = qry.sql(), "counting member teams");

        let count: i64 = qry.build_query_scalar().fetch_one(&mut *conn).await?;
        Ok(u64::try_from(count)?)
    }
}

#[async_trait]
impl Search<MemberTeam> for Connection {
    async fn search(&self, condition: &MemberSearchCondition) -> Result<Vec<MemberTeam>> {
        let predicates = Predicates::compose(condition);
        self.fetch_member_teams(&predicates, None).await
    }

    async fn search_page_eager(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberTeam>> {
        let predicates = Predicates::compose(condition);
        let content = self.fetch_member_teams(&predicates, Some(request)).await?;
        let total = self.count_member_teams(&predicates).await?;
        Ok(Page::new(content, request, total))
    }

    async fn search_page_elided(
        &self,
        condition: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberTeam>> {
        let predicates = Predicates::compose(condition);
        let content = self.fetch_member_teams(&predicates, Some(request)).await?;
        page_from(content, request, || self.count_member_teams(&predicates)).await
    }
}
