//! Repository for the `politicians` table.

use manifesto_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::politician::{CreatePolitician, Politician};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, party, age, promises_made, promises_fulfilled, \
                       promises_in_progress, promises_dont_care";

/// Provides create and read operations for politicians.
pub struct PoliticianRepo;

impl PoliticianRepo {
    /// Insert a new politician, returning the created row with its new id.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreatePolitician,
    ) -> Result<Politician, sqlx::Error> {
        let query = format!(
            "INSERT INTO politicians (name, party, age, promises_made, promises_fulfilled,
                                      promises_in_progress, promises_dont_care)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let politician = sqlx::query_as::<_, Politician>(&query)
            .bind(&input.name)
            .bind(&input.party)
            .bind(input.age)
            .bind(input.promises_made)
            .bind(input.promises_fulfilled)
            .bind(input.promises_in_progress)
            .bind(input.promises_dont_care)
            .fetch_one(pool)
            .await?;
        tracing::debug!(id = politician.id, "Inserted politician");
        Ok(politician)
    }

    /// Find a politician by id. Absence is `Ok(None)`, not an error.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Politician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM politicians WHERE id = $1");
        sqlx::query_as::<_, Politician>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all politicians in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Politician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM politicians ORDER BY id ASC");
        sqlx::query_as::<_, Politician>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM politicians")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
