use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Aggregated ages of all members.
/// Everything except the count is `None` when there are no members.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AgeStats {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TeamAgeStats {
    pub team_name: String,
    pub avg_age: f64,
}
