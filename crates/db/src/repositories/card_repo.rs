//! Repository for the `cards` table.

use prancha_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::{Card, CreateCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, label, emoji, color, phrase, sort_order, created_at";

/// Provides CRUD operations for communication cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card, returning the created row.
    ///
    /// Category ownership must be verified by the caller before inserting.
    pub async fn create(pool: &PgPool, input: &CreateCard) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards (category_id, label, emoji, color, phrase)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(input.category_id)
            .bind(&input.label)
            .bind(&input.emoji)
            .bind(&input.color)
            .bind(&input.phrase)
            .fetch_one(pool)
            .await
    }

    /// List a category's cards ordered by (sort_order, label).
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards
             WHERE category_id = $1
             ORDER BY sort_order, label"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a card only when the full ownership chain holds: the card
    /// belongs to the category, and the category belongs to the caregiver.
    ///
    /// Returns `true` if a row was deleted; any broken link in the chain
    /// deletes nothing.
    pub async fn delete_scoped(
        pool: &PgPool,
        caregiver_id: DbId,
        category_id: DbId,
        card_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM cards
             USING categories
             WHERE cards.id = $1
               AND cards.category_id = $2
               AND categories.id = cards.category_id
               AND categories.caregiver_id = $3",
        )
        .bind(card_id)
        .bind(category_id)
        .bind(caregiver_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
