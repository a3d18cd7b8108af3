pub mod memory;
pub mod users;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::UserRecord;

pub use memory::MemoryUserStore;
pub use users::PgUserStore;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Conflict(Uuid),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Conflict(id) => write!(f, "Item with id {id} already exists"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// Classify a failed insert of the record with the given id.
    pub fn from_insert(err: sqlx::Error, id: Uuid) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                StoreError::Unavailable("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => {
                StoreError::Unavailable("connection pool closed".to_string())
            }
            err if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation()) =>
            {
                StoreError::Conflict(id)
            }
            err => StoreError::from(err),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Durable storage for accepted contact records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a fully built record and return the stored version.
    async fn create(&self, record: &UserRecord) -> Result<UserRecord, StoreError>;
}
