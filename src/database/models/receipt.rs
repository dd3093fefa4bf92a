use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::database::manager::DatabaseError;

/// Write-once uniqueness record stored via the /db endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receipt {
    pub id: i32,
    pub hash: String,
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Insert a new hash. Returns false (and logs) when the hash already exists.
    pub async fn insert(pool: &PgPool, hash: &str) -> Result<bool, DatabaseError> {
        match sqlx::query("INSERT INTO receipts (hash) VALUES ($1)")
            .bind(hash)
            .execute(pool)
            .await
        {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::error!("Duplicate receipt hash: {}", hash);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Receipt>, DatabaseError> {
        let receipt = sqlx::query_as::<_, Receipt>(
            "SELECT id, hash, created_at FROM receipts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(receipt)
    }
}
