use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use roster_data::BulkUpdate;

use crate::Connection;

impl Connection {
    async fn execute_bulk(&self, mut qry: QueryBuilder<'_, Sqlite>) -> Result<u64> {
        let mut conn = self.lock().await;
        let result = qry.build().execute(&mut *conn).await?;
        tracing::info!(sql = qry.sql(), rows = result.rows_affected(), "bulk update");
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BulkUpdate for Connection {
    async fn rename_younger_than(&self, age: i32, username: &str) -> Result<u64> {
        let mut qry = QueryBuilder::<Sqlite>::new("UPDATE members SET username = ");
        qry.push_bind(username.to_string())
            .push(" WHERE age < ")
            .push_bind(age);
        self.execute_bulk(qry).await
    }

    async fn add_age(&self, delta: i32) -> Result<u64> {
        let mut qry = QueryBuilder::<Sqlite>::new("UPDATE members SET age = age + ");
        qry.push_bind(delta);
        self.execute_bulk(qry).await
    }

    async fn multiply_age(&self, factor: i32) -> Result<u64> {
        let mut qry = QueryBuilder::<Sqlite>::new("UPDATE members SET age = age * ");
        qry.push_bind(factor);
        self.execute_bulk(qry).await
    }

    async fn delete_older_than(&self, age: i32) -> Result<u64> {
        let mut qry = QueryBuilder::<Sqlite>::new("DELETE FROM members WHERE age > ");
        qry.push_bind(age);
        self.execute_bulk(qry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use roster_data::{Insert, Member, MemberFilter, MemberSearchCondition, Query, Search};

    async fn open_with_members() -> Connection {
        let db = Connection::open_test().await;
        for (name, age) in [("member1", 10), ("member2", 20), ("member3", 30), ("member4", 40)] {
            db.insert(Member::new(name, age, None)).await.unwrap();
        }
        db
    }

    async fn all_members(db: &Connection) -> Vec<Member> {
        db.query(&MemberFilter::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_rename_younger_than() {
        let db = open_with_members().await;
        let count = db.rename_younger_than(28, "guest").await.unwrap();
        assert_eq!(count, 2);

        let names: Vec<String> = all_members(&db)
            .await
            .iter()
            .map(|m| m.display_name().to_string())
            .collect();
        assert_eq!(names, vec!["guest", "guest", "member3", "member4"]);
    }

    #[tokio::test]
    async fn test_add_and_multiply_age() {
        let db = open_with_members().await;
        assert_eq!(db.add_age(1).await.unwrap(), 4);
        assert_eq!(db.multiply_age(2).await.unwrap(), 4);

        let ages: Vec<i32> = all_members(&db).await.iter().map(|m| m.age).collect();
        assert_eq!(ages, vec![22, 42, 62, 82]);
    }

    #[tokio::test]
    async fn test_age_overflow_leaves_members_unchanged() {
        let db = open_with_members().await;
        db.insert(Member::new("member5", 2_000_000_000, None))
            .await
            .unwrap();

        assert!(db.multiply_age(2).await.is_err());
        assert!(db.add_age(i32::MAX).await.is_err());

        let ages: Vec<i32> = all_members(&db).await.iter().map(|m| m.age).collect();
        assert_eq!(ages, vec![10, 20, 30, 40, 2_000_000_000]);

        let condition = MemberSearchCondition {
            age_goe: Some(0),
            ..Default::default()
        };
        let found = db.search(&condition).await.unwrap();
        assert_eq!(found.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_older_than() {
        let db = open_with_members().await;
        assert_eq!(db.delete_older_than(18).await.unwrap(), 3);

        let members = all_members(&db).await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].display_name(), "member1");
    }
}
