//! Repository for the `categories` table.
//!
//! All lookups and mutations are scoped by caregiver id, so a guessed
//! category id belonging to someone else behaves exactly like a missing row.

use prancha_core::defaults::DEFAULT_CATEGORIES;
use prancha_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, caregiver_id, name, color, sort_order";

/// Provides CRUD operations for card categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// When no color is supplied the column is omitted from the insert so the
    /// database default applies.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = if input.color.is_some() {
            format!(
                "INSERT INTO categories (caregiver_id, name, color)
                 VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            )
        } else {
            format!(
                "INSERT INTO categories (caregiver_id, name)
                 VALUES ($1, $2)
                 RETURNING {COLUMNS}"
            )
        };
        let mut q = sqlx::query_as::<_, Category>(&query)
            .bind(input.caregiver_id)
            .bind(&input.name);
        if let Some(ref color) = input.color {
            q = q.bind(color);
        }
        q.fetch_one(pool).await
    }

    /// Find a category only if it belongs to the given caregiver.
    pub async fn find_for_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND caregiver_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(caregiver_id)
            .fetch_optional(pool)
            .await
    }

    /// List a caregiver's categories ordered by (sort_order, name).
    pub async fn list_by_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE caregiver_id = $1
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(caregiver_id)
            .fetch_all(pool)
            .await
    }

    /// Update a category owned by the caregiver. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the category does not exist or belongs to someone else.
    pub async fn update_for_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($3, name),
                color = COALESCE($4, color)
             WHERE id = $1 AND caregiver_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(caregiver_id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category owned by the caregiver. The foreign key cascades to
    /// its cards. Returns `true` if a row was deleted.
    pub async fn delete_for_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND caregiver_id = $2")
            .bind(id)
            .bind(caregiver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Seed the fixed starter categories for a caregiver.
    ///
    /// Inserts only names the caregiver does not already own
    /// (`ON CONFLICT DO NOTHING` against `uq_categories_caregiver_name`, so
    /// concurrent landing visits cannot double-seed), making it safe to call
    /// on every visit to the card landing screen. A manually created category
    /// matching a default name suppresses seeding of that name. Seeded rows
    /// get their position in the default list as sort_order so the landing
    /// screen shows them in the canonical order.
    /// Returns the number of categories created.
    pub async fn ensure_defaults(pool: &PgPool, caregiver_id: DbId) -> Result<u64, sqlx::Error> {
        let mut created = 0;
        for (position, (name, color)) in DEFAULT_CATEGORIES.iter().enumerate() {
            let result = sqlx::query(
                "INSERT INTO categories (caregiver_id, name, color, sort_order)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (caregiver_id, name) DO NOTHING",
            )
            .bind(caregiver_id)
            .bind(name)
            .bind(color)
            .bind(position as i32)
            .execute(pool)
            .await?;
            created += result.rows_affected();
        }
        Ok(created)
    }
}
