use csv::StringRecord;
use sqlx::PgPool;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// user_id, first_name, last_name, email, gender, company, city
const COLUMNS: usize = 7;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Row {line} has {found} columns, expected {expected}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Row {line} has a non-integer user id: {value}")]
    InvalidUserId { line: u64, value: String },
}

#[derive(Debug, PartialEq, Eq)]
struct NewPerson {
    user_id: i32,
    first_name: String,
    last_name: String,
    email: String,
    gender: String,
    company: String,
    city: String,
}

fn parse_row(line: u64, record: &StringRecord) -> Result<NewPerson, LoaderError> {
    if record.len() != COLUMNS {
        return Err(LoaderError::ColumnCount {
            line,
            expected: COLUMNS,
            found: record.len(),
        });
    }

    let user_id = record[0].parse::<i32>().map_err(|_| LoaderError::InvalidUserId {
        line,
        value: record[0].to_string(),
    })?;

    Ok(NewPerson {
        user_id,
        first_name: record[1].to_string(),
        last_name: record[2].to_string(),
        email: record[3].to_string(),
        gender: record[4].to_string(),
        company: record[5].to_string(),
        city: record[6].to_string(),
    })
}

/// Bulk-load person records from a headerless CSV file in one transaction.
/// Returns the number of rows inserted.
pub async fn load_people_csv(pool: &PgPool, path: &Path, replace: bool) -> Result<u64, LoaderError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;

    let mut tx = pool.begin().await?;

    if replace {
        sqlx::query("TRUNCATE people RESTART IDENTITY").execute(&mut *tx).await?;
    }

    let mut count = 0u64;
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let person = parse_row(index as u64 + 1, &record)?;

        sqlx::query(
            "INSERT INTO people (user_id, first_name, last_name, email, gender, company, city) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(person.user_id)
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.email)
        .bind(&person.gender)
        .bind(&person.company)
        .bind(&person.city)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;

    info!("Loaded {} person records from {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row() {
        let row = record(&[
            "352",
            "Glen",
            "Rosebotham",
            "grosebotham9r@examiner.com",
            "Bigender",
            "Buzzster",
            "Romorantin-Lanthenay",
        ]);

        let person = parse_row(1, &row).unwrap();
        assert_eq!(person.user_id, 352);
        assert_eq!(person.first_name, "Glen");
        assert_eq!(person.city, "Romorantin-Lanthenay");
    }

    #[test]
    fn test_parse_row_wrong_column_count() {
        let row = record(&["352", "Glen", "Rosebotham"]);

        match parse_row(4, &row) {
            Err(LoaderError::ColumnCount { line, expected, found }) => {
                assert_eq!(line, 4);
                assert_eq!(expected, 7);
                assert_eq!(found, 3);
            }
            other => panic!("expected ColumnCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_row_bad_user_id() {
        let row = record(&["oops", "Glen", "Rosebotham", "g@x.com", "Bigender", "Buzzster", "Serhetabat"]);

        match parse_row(2, &row) {
            Err(LoaderError::InvalidUserId { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidUserId error, got {:?}", other),
        }
    }
}
