use sqlx::FromRow;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum QueryError {
    #[error("No matching row")]
    NotFound,
    #[error("{0} rows match where one was expected")]
    Ambiguous(usize),
}

/// Key returned by `INSERT .. RETURNING id`
#[derive(Debug, Clone, FromRow)]
pub(crate) struct Id<T> {
    pub id: T,
}

/// Take the one row of a lookup by key or unique name
pub(crate) fn single<T>(mut rows: Vec<T>) -> Result<T, QueryError> {
    match rows.len() {
        0 => Err(QueryError::NotFound),
        1 => Ok(rows.remove(0)),
        n => Err(QueryError::Ambiguous(n)),
    }
}
