use anyhow::Result;
use async_trait::async_trait;

use roster_data::{AgeStats, Statistics, TeamAgeStats};

use crate::Connection;

#[async_trait]
impl Statistics for Connection {
    async fn age_stats(&self) -> Result<AgeStats> {
        let mut conn = self.lock().await;
        let stats: AgeStats = sqlx::query_as(
            r#"
            SELECT
                COUNT(id) AS count,
                SUM(age) AS sum,
                AVG(age) AS avg,
                MIN(age) AS min,
                MAX(age) AS max
            FROM members
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;
        Ok(stats)
    }

    /// Average age per team name. Teams without members are left out.
    async fn team_age_stats(&self) -> Result<Vec<TeamAgeStats>> {
        let mut conn = self.lock().await;
        let stats: Vec<TeamAgeStats> = sqlx::query_as(
            r#"
            SELECT
                t.name AS team_name,
                AVG(m.age) AS avg_age
            FROM members m
            JOIN teams t ON m.team_id = t.id
            GROUP BY t.name
            ORDER BY t.name
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use roster_data::{Insert, Member, Team};

    #[tokio::test]
    async fn test_age_stats() {
        let db = Connection::open_test().await;
        let team_a = db.insert(Team::new("teamA")).await.unwrap();
        let team_b = db.insert(Team::new("teamB")).await.unwrap();
        db.insert(Member::new("member1", 10, Some(&team_a))).await.unwrap();
        db.insert(Member::new("member2", 20, Some(&team_a))).await.unwrap();
        db.insert(Member::new("member3", 30, Some(&team_b))).await.unwrap();
        db.insert(Member::new("member4", 40, Some(&team_b))).await.unwrap();

        let stats = db.age_stats().await.unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.sum, Some(100));
        assert_eq!(stats.avg, Some(25.0));
        assert_eq!(stats.min, Some(10));
        assert_eq!(stats.max, Some(40));

        let teams = db.team_age_stats().await.unwrap();
        assert_eq!(
            teams,
            vec![
                TeamAgeStats {
                    team_name: "teamA".to_string(),
                    avg_age: 15.0,
                },
                TeamAgeStats {
                    team_name: "teamB".to_string(),
                    avg_age: 35.0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_age_stats_empty() {
        let db = Connection::open_test().await;
        db.insert(Team::new("teamA")).await.unwrap();

        let stats = db.age_stats().await.unwrap();
        assert_eq!(stats, AgeStats::default());
        assert!(db.team_age_stats().await.unwrap().is_empty());
    }
}
