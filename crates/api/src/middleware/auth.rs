//! Bearer-token session gate for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use prancha_core::error::CoreError;
use prancha_core::types::DbId;
use prancha_db::repositories::SessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caregiver extracted from a Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires a
/// session. Handlers receive the caregiver id explicitly and pass it into
/// every repository call — there is no ambient session state.
///
/// ```ignore
/// async fn my_handler(session: SessionCaregiver) -> AppResult<Json<()>> {
///     tracing::info!(caregiver_id = session.caregiver_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionCaregiver {
    /// The caregiver's internal database id.
    pub caregiver_id: DbId,
    /// Display name cached on the session row at login, refreshed on
    /// profile update.
    pub display_name: String,
}

impl FromRequestParts<AppState> for SessionCaregiver {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(SessionCaregiver {
            caregiver_id: session.caregiver_id,
            display_name: session.caregiver_name,
        })
    }
}
