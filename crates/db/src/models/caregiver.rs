//! Caregiver entity model and DTOs.

use prancha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full caregiver row from the `caregivers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Caregiver {
    pub id: DbId,
    pub name: String,
    /// Stored normalized: trimmed and lower-cased.
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a caregiver on first login with an unseen email.
#[derive(Debug, Deserialize)]
pub struct CreateCaregiver {
    pub name: String,
    pub email: String,
}
