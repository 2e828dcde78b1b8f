//! Repository for the `sessions` table.

use prancha_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, caregiver_id, token_hash, caregiver_name, expires_at, is_revoked, created_at";

/// Provides CRUD operations for caregiver sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (caregiver_id, token_hash, caregiver_name, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.caregiver_id)
            .bind(&input.token_hash)
            .bind(&input.caregiver_name)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active session by its token hash.
    ///
    /// Only returns sessions that are not revoked and not expired.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke all active sessions for a caregiver. Returns the count of
    /// revoked sessions.
    pub async fn revoke_all_for_caregiver(
        pool: &PgPool,
        caregiver_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET is_revoked = true
             WHERE caregiver_id = $1 AND is_revoked = false",
        )
        .bind(caregiver_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Refresh the cached display name on all of a caregiver's sessions after
    /// a profile update. Returns the count of updated rows.
    pub async fn refresh_display_name(
        pool: &PgPool,
        caregiver_id: DbId,
        name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET caregiver_name = $2 WHERE caregiver_id = $1")
            .bind(caregiver_id)
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
