use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use roster_data::{Delete, Insert, Member, MemberFilter, MemberOrder, Query, Retrieve, Update};

use crate::{
    results::{single, Id},
    Connection,
};

#[async_trait]
impl Query<Member> for Connection {
    type Filter = MemberFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Member>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                username,
                age,
                team_id
            FROM members
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(username) = filter.username.clone() {
            qry.push(" AND username = ").push_bind(username);
        }
        if let Some(team_id) = filter.team_id {
            qry.push(" AND team_id = ").push_bind(team_id);
        }
        match filter.order {
            MemberOrder::Id => qry.push(" ORDER BY id"),
            MemberOrder::AgeDescUsernameAsc => {
                qry.push(" ORDER BY age DESC, username ASC NULLS LAST, id")
            }
        };

        let members: Vec<Member> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(members)
    }
}

#[async_trait]
impl Retrieve<Member> for Connection {
    type Key = u32;
    async fn retrieve(&self, member_id: Self::Key) -> Result<Member> {
        let filter = MemberFilter {
            id: Some(member_id),
            ..Default::default()
        };
        let found: Vec<Member> = self.query(&filter).await?;
        Ok(single(found)?)
    }
}

#[async_trait]
impl Insert<Member> for Connection {
    async fn insert(&self, member: Member) -> Result<Member> {
        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO members (
                    username,
                    age,
                    team_id
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&member.username)
                .push_bind(member.age)
                .push_bind(member.team_id);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        self.retrieve(insert.id).await
    }
}

#[async_trait]
impl Update<Member> for Connection {
    /// Update member
    async fn update(&self, member: Member) -> Result<Member> {
        {
            let mut conn = self.lock().await;
            QueryBuilder::<Sqlite>::new("UPDATE members SET")
                .push(" username = ")
                .push_bind(&member.username)
                .push(", age = ")
                .push_bind(member.age)
                .push(", team_id = ")
                .push_bind(member.team_id)
                .push(" WHERE id = ")
                .push_bind(member.id)
                .build()
                .execute(&mut *conn)
                .await?;
        }
        self.retrieve(member.id).await
    }
}

#[async_trait]
impl Delete<Member> for Connection {
    /// Delete member
    async fn delete(&self, member: Member) -> Result<()> {
        let mut conn = self.lock().await;
        QueryBuilder::<Sqlite>::new("DELETE FROM members WHERE id = ")
            .push_bind(member.id)
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

    use roster_data::Team;

    #[tokio::test]
    async fn test_member_insert() {
        let db = Connection::open_test().await;
        let team = db.insert(Team::new("teamA")).await.unwrap();
        let member = db
            .insert(Member::new("member1", 10, Some(&team)))
            .await
            .unwrap();

        assert!(member.id > 0);
        assert_eq!(member.username.as_deref(), Some("member1"));
        assert_eq!(member.age, 10);
        assert_eq!(member.team_id, Some(team.id));
    }

    #[tokio::test]
    async fn test_member_find_by_id_and_username() {
        let db = Connection::open_test().await;
        let member = db.insert(Member::new("member5", 10, None)).await.unwrap();

        let found: Member = db.retrieve(member.id).await.unwrap();
        assert_eq!(found, member);

        let all: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        assert_eq!(all, vec![member.clone()]);

        let by_name: Vec<Member> = db
            .query(&MemberFilter {
                username: Some("member5".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name, vec![member]);
    }

    #[tokio::test]
    async fn test_member_update_and_change_team() {
        let db = Connection::open_test().await;
        let team_a = db.insert(Team::new("teamA")).await.unwrap();
        let team_b = db.insert(Team::new("teamB")).await.unwrap();
        let mut member = db
            .insert(Member::new("member1", 10, Some(&team_a)))
            .await
            .unwrap();

        member.username = Some("member1 updated".to_string());
        member.age = 11;
        member.change_team(&team_b);
        let member = db.update(member).await.unwrap();

        assert_eq!(member.username.as_deref(), Some("member1 updated"));
        assert_eq!(member.age, 11);
        let team = member.get_team(&db).await.unwrap();
        assert_eq!(team, Some(team_b));
    }

    #[tokio::test]
    async fn test_member_without_team() {
        let db = Connection::open_test().await;
        let member = db.insert(Member::new("loner", 33, None)).await.unwrap();
        assert_eq!(member.get_team(&db).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_member_unknown_team_rejected() {
        let db = Connection::open_test().await;
        let member = Member {
            username: Some("member1".to_string()),
            team_id: Some(4711),
            ..Default::default()
        };
        assert!(db.insert(member).await.is_err());
    }

    #[tokio::test]
    async fn test_member_delete() {
        let db = Connection::open_test().await;
        let member = db.insert(Member::new("member1", 10, None)).await.unwrap();
        db.delete(member.clone()).await.unwrap();

        let result: Result<Member> = db.retrieve(member.id).await;
        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<QueryError>(), Some(QueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_member_sort_age_desc_username_nulls_last() {
        let db = Connection::open_test().await;
        db.insert(Member::new("member1", 10, None)).await.unwrap();
        db.insert(Member {
            age: 100,
            ..Default::default()
        })
        .await
        .unwrap();
        db.insert(Member::new("member6", 100, None)).await.unwrap();
        db.insert(Member::new("member5", 100, None)).await.unwrap();

        let members: Vec<Member> = db
            .query(&MemberFilter {
                order: MemberOrder::AgeDescUsernameAsc,
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<Option<&str>> = members.iter().map(|m| m.username.as_deref()).collect();
        assert_eq!(
            names,
            vec![Some("member5"), Some("member6"), None, Some("member1")]
        );
    }

    #[tokio::test]
    async fn test_team_get_members() {
        let db = Connection::open_test().await;
        let team_a = db.insert(Team::new("teamA")).await.unwrap();
        let team_b = db.insert(Team::new("teamB")).await.unwrap();
        db.insert(Member::new("member1", 10, Some(&team_a))).await.unwrap();
        db.insert(Member::new("member2", 20, Some(&team_a))).await.unwrap();
        db.insert(Member::new("member3", 30, Some(&team_b))).await.unwrap();

        let members = team_a.get_members(&db).await.unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.display_name()).collect();
        assert_eq!(names, vec!["member1", "member2"]);
    }
}
