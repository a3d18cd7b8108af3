use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::UserRecord;

use super::{StoreError, UserStore};

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, record: &UserRecord) -> Result<UserRecord, StoreError> {
        let created = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (id, first_name, last_name, email, submitted_date)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(record.id)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(record.submitted_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| StoreError::from_insert(err, record.id))?;
        Ok(created)
    }
}
