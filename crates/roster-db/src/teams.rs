use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use roster_data::{Delete, Insert, Query, Retrieve, Team, TeamFilter, Update};

use crate::{
    results::{single, Id},
    Connection,
};

#[async_trait]
impl Query<Team> for Connection {
    type Filter = TeamFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Team>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                name
            FROM teams
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(name) = filter.name.clone() {
            qry.push(" AND name = ").push_bind(name);
        }
        qry.push(" ORDER BY id");

        let teams: Vec<Team> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(teams)
    }
}

#[async_trait]
impl Retrieve<Team> for Connection {
    type Key = u32;
    async fn retrieve(&self, team_id: Self::Key) -> Result<Team> {
        let filter = TeamFilter {
            id: Some(team_id),
            ..Default::default()
        };
        let found: Vec<Team> = self.query(&filter).await?;
        Ok(single(found)?)
    }
}

impl Connection {
    /// Find the single team with the given name
    pub async fn team_by_name(&self, name: &str) -> Result<Team> {
        let teams: Vec<Team> = self
            .query(&TeamFilter {
                name: Some(name.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(single(teams)?)
    }
}

#[async_trait]
impl Insert<Team> for Connection {
    async fn insert(&self, team: Team) -> Result<Team> {
        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            QueryBuilder::<Sqlite>::new("INSERT INTO teams (name) VALUES (")
                .push_bind(&team.name)
                .push(") RETURNING id")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        self.retrieve(insert.id).await
    }
}

#[async_trait]
impl Update<Team> for Connection {
    async fn update(&self, team: Team) -> Result<Team> {
        {
            let mut conn = self.lock().await;
            QueryBuilder::<Sqlite>::new("UPDATE teams SET")
                .push(" name = ")
                .push_bind(&team.name)
                .push(" WHERE id = ")
                .push_bind(team.id)
                .build()
                .execute(&mut *conn)
                .await?;
        }
        self.retrieve(team.id).await
    }
}

#[async_trait]
impl Delete<Team> for Connection {
    async fn delete(&self, team: Team) -> Result<()> {
        let mut conn = self.lock().await;
        QueryBuilder::<Sqlite>::new("DELETE FROM teams WHERE id = ")
            .push_bind(team.id)
            .build()
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::results::QueryError;

    use roster_data::Member;

    #[tokio::test]
    async fn test_team_insert_and_retrieve() {
        let db = Connection::open_test().await;
        let team = db.insert(Team::new("teamA")).await.unwrap();
        assert_eq!(team.name, "teamA");

        let found: Team = db.retrieve(team.id).await.unwrap();
        assert_eq!(found, team);
    }

    #[tokio::test]
    async fn test_team_update() {
        let db = Connection::open_test().await;
        let mut team = db.insert(Team::new("teamA")).await.unwrap();
        team.name = "teamC".to_string();
        let team = db.update(team).await.unwrap();
        assert_eq!(team.name, "teamC");
    }

    #[tokio::test]
    async fn test_team_by_name() {
        let db = Connection::open_test().await;
        db.insert(Team::new("teamA")).await.unwrap();
        let team_b = db.insert(Team::new("teamB")).await.unwrap();

        assert_eq!(db.team_by_name("teamB").await.unwrap(), team_b);

        let err = db.team_by_name("teamX").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<QueryError>(), Some(QueryError::NotFound)));

        db.insert(Team::new("teamB")).await.unwrap();
        let err = db.team_by_name("teamB").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<QueryError>(), Some(QueryError::Ambiguous(2))));
    }

    #[tokio::test]
    async fn test_team_delete_with_members_fails() {
        let db = Connection::open_test().await;
        let team = db.insert(Team::new("teamA")).await.unwrap();
        db.insert(Member::new("member1", 10, Some(&team))).await.unwrap();

        assert!(db.delete(team.clone()).await.is_err());

        let members = team.get_members(&db).await.unwrap();
        assert_eq!(members.len(), 1);
    }

    #[tokio::test]
    async fn test_team_delete() {
        let db = Connection::open_test().await;
        let team = db.insert(Team::new("teamA")).await.unwrap();
        db.delete(team.clone()).await.unwrap();

        let result: Result<Team> = db.retrieve(team.id).await;
        assert!(result.is_err());
    }
}
