use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::{Mutex, MutexGuard};

/// A thread safe connection to the database
#[derive(Clone)]
pub struct Connection(Arc<Mutex<SqliteConnection>>);

impl Connection {
    /// Open a connection to the database
    pub async fn open(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(filename)?
            .create_if_missing(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&opts).await?;
        tracing::debug!(filename, "opened database");
        Ok(Self(Arc::new(Mutex::new(conn))))
    }

    /// Acquire the underlying connection. Hold the guard
    /// only for the duration of a single statement.
    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.0.lock().await
    }

    /// Open a new test database connection.
    /// The database lives in memory and is created on each open.
    #[cfg(test)]
    pub async fn open_test() -> Self {
        let conn = Self::open("sqlite::memory:").await.unwrap();

        // Install the schema
        crate::schema::install(&conn).await.unwrap();

        conn
    }
}
