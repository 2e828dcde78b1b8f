//! Repository for the `caregivers` table.

use prancha_core::types::DbId;
use sqlx::PgPool;

use crate::models::caregiver::{Caregiver, CreateCaregiver};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at";

/// Provides CRUD operations for caregivers.
pub struct CaregiverRepo;

impl CaregiverRepo {
    /// Insert a new caregiver, returning the created row.
    ///
    /// The email must already be normalized (trimmed, lower-cased) by the
    /// caller; `uq_caregivers_email` rejects duplicates.
    pub async fn create(pool: &PgPool, input: &CreateCaregiver) -> Result<Caregiver, sqlx::Error> {
        let query = format!(
            "INSERT INTO caregivers (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Caregiver>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a caregiver by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Caregiver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM caregivers WHERE id = $1");
        sqlx::query_as::<_, Caregiver>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a caregiver by normalized email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Caregiver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM caregivers WHERE email = $1");
        sqlx::query_as::<_, Caregiver>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all caregivers ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Caregiver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM caregivers ORDER BY name");
        sqlx::query_as::<_, Caregiver>(&query).fetch_all(pool).await
    }

    /// Update a caregiver's profile. Both fields are required by the profile
    /// form, so this is a full replace rather than a patch.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        name: &str,
        email: &str,
    ) -> Result<Option<Caregiver>, sqlx::Error> {
        let query = format!(
            "UPDATE caregivers SET name = $2, email = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Caregiver>(&query)
            .bind(id)
            .bind(name)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a caregiver. The foreign keys cascade through children,
    /// categories, cards, and sessions. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM caregivers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
