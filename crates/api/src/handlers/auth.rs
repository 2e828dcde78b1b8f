//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use prancha_core::error::CoreError;
use prancha_core::types::DbId;
use prancha_db::models::caregiver::CreateCaregiver;
use prancha_db::models::session::CreateSession;
use prancha_db::repositories::{CaregiverRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::normalize_email;
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionCaregiver;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
    pub caregiver: CaregiverInfo,
}

/// Public caregiver info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct CaregiverInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Resolve or create a caregiver by normalized email and establish a session.
/// A repeat login keeps the stored display name, even when a different name
/// is submitted.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let name = input.name.trim();
    let email = normalize_email(&input.email);

    if name.is_empty() || email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email are required".into(),
        )));
    }

    let caregiver = match CaregiverRepo::find_by_email(&state.pool, &email).await? {
        Some(existing) => existing,
        None => {
            let created = CaregiverRepo::create(
                &state.pool,
                &CreateCaregiver {
                    name: name.to_string(),
                    email,
                },
            )
            .await?;
            tracing::info!(caregiver_id = created.id, "Caregiver created on first login");
            created
        }
    };

    let (plaintext, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_ttl_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            caregiver_id: caregiver.id,
            token_hash,
            caregiver_name: caregiver.name.clone(),
            expires_at,
        },
    )
    .await?;

    tracing::info!(caregiver_id = caregiver.id, "Caregiver logged in");

    Ok(Json(LoginResponse {
        session_token: plaintext,
        expires_in: state.config.session_ttl_hours * 3600,
        caregiver: CaregiverInfo {
            id: caregiver.id,
            name: caregiver.name,
            email: caregiver.email,
        },
    }))
}

/// GET /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated caregiver. Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    session: SessionCaregiver,
) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_caregiver(&state.pool, session.caregiver_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
