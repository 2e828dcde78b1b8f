//! Child profile model and DTOs.

use prancha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full child row from the `children` table.
///
/// Age and gender are deliberately free text; the board does not interpret
/// them beyond display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Child {
    pub id: DbId,
    pub caregiver_id: DbId,
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new child profile.
#[derive(Debug, Deserialize)]
pub struct CreateChild {
    pub caregiver_id: DbId,
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub note: Option<String>,
}
