//! Communication card model and DTOs.

use prancha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full card row from the `cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub category_id: DbId,
    pub label: String,
    pub emoji: String,
    pub color: String,
    /// Phrase spoken by the client-side speech synthesis, up to 240 chars.
    pub phrase: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new card.
///
/// Emoji and color are resolved by the caller before insert (placeholder
/// glyph and category-color fallback respectively), so both are required
/// here even though the HTTP request leaves them optional.
#[derive(Debug, Deserialize)]
pub struct CreateCard {
    pub category_id: DbId,
    pub label: String,
    pub emoji: String,
    pub color: String,
    pub phrase: Option<String>,
}
