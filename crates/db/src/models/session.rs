//! Caregiver session model and DTOs.

use prancha_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// The caregiver's display name is cached here so the request gate can hand
/// it to handlers without an extra lookup; profile updates refresh it.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub caregiver_id: DbId,
    pub token_hash: String,
    pub caregiver_name: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session at login.
pub struct CreateSession {
    pub caregiver_id: DbId,
    pub token_hash: String,
    pub caregiver_name: String,
    pub expires_at: Timestamp,
}
