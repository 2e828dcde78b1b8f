//! Card category model and DTOs.

use prancha_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub caregiver_id: DbId,
    pub name: String,
    /// Hex color string. The column default applies when omitted at creation.
    pub color: Option<String>,
    pub sort_order: i32,
}

/// DTO for creating a new category.
///
/// A `None` color leaves the column to its database default rather than
/// forcing a value in application code.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub caregiver_id: DbId,
    pub name: String,
    pub color: Option<String>,
}

/// DTO for updating a category. `None` fields leave the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}
