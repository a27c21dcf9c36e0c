use anyhow::Result;
use async_trait::async_trait;

use crate::{AgeStats, TeamAgeStats};

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Update<T> {
    async fn update(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

#[async_trait]
pub trait Delete<T> {
    async fn delete(&self, item: T) -> Result<()>;
}

/// Aggregates over the member ages
#[async_trait]
pub trait Statistics {
    async fn age_stats(&self) -> Result<AgeStats>;
    async fn team_age_stats(&self) -> Result<Vec<TeamAgeStats>>;
}

/// Set based updates on members. Every operation
/// returns the number of affected rows.
#[async_trait]
pub trait BulkUpdate {
    async fn rename_younger_than(&self, age: i32, username: &str) -> Result<u64>;
    async fn add_age(&self, delta: i32) -> Result<u64>;
    async fn multiply_age(&self, factor: i32) -> Result<u64>;
    async fn delete_older_than(&self, age: i32) -> Result<u64>;
}
