//! Repository for the `children` table.

use prancha_core::types::DbId;
use sqlx::PgPool;

use crate::models::child::{Child, CreateChild};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, caregiver_id, name, age, gender, note, created_at";

/// Provides CRUD operations for child profiles.
pub struct ChildRepo;

impl ChildRepo {
    /// Insert a new child profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChild) -> Result<Child, sqlx::Error> {
        let query = format!(
            "INSERT INTO children (caregiver_id, name, age, gender, note)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(input.caregiver_id)
            .bind(&input.name)
            .bind(&input.age)
            .bind(&input.gender)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// List a caregiver's children ordered by name.
    pub async fn list_by_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
    ) -> Result<Vec<Child>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM children WHERE caregiver_id = $1 ORDER BY name");
        sqlx::query_as::<_, Child>(&query)
            .bind(caregiver_id)
            .fetch_all(pool)
            .await
    }
}
