use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::database::manager::DatabaseError;

/// A person record, loaded once in bulk and never mutated by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub company: String,
    pub city: String,
}

impl Person {
    /// All records in storage order
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Person>, DatabaseError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, user_id, first_name, last_name, email, gender, company, city \
             FROM people ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(people)
    }
}
