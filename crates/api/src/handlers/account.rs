//! Account profile handlers.

use axum::extract::State;
use axum::Json;
use prancha_core::error::CoreError;
use prancha_db::models::caregiver::Caregiver;
use prancha_db::repositories::{CaregiverRepo, SessionRepo};
use serde::Deserialize;

use crate::auth::normalize_email;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionCaregiver;
use crate::state::AppState;

/// Request body for `PUT /account`. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub email: String,
}

/// GET /api/v1/account
///
/// The authenticated caregiver's own profile.
pub async fn get(
    session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<Caregiver>> {
    let caregiver = CaregiverRepo::find_by_id(&state.pool, session.caregiver_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Caregiver",
            id: session.caregiver_id,
        }))?;
    Ok(Json(caregiver))
}

/// PUT /api/v1/account
///
/// Update the caregiver's name and email. The email is normalized before
/// storage; taking another caregiver's email is a 409. The display name
/// cached on session rows is refreshed so the dashboard greeting updates
/// immediately.
pub async fn update(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Json(input): Json<ProfileRequest>,
) -> AppResult<Json<Caregiver>> {
    let name = input.name.trim();
    let email = normalize_email(&input.email);

    if name.is_empty() || email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email are required".into(),
        )));
    }

    let caregiver = CaregiverRepo::update_profile(&state.pool, session.caregiver_id, name, &email)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Caregiver",
            id: session.caregiver_id,
        }))?;

    SessionRepo::refresh_display_name(&state.pool, caregiver.id, &caregiver.name).await?;

    tracing::info!(caregiver_id = caregiver.id, "Caregiver profile updated");

    Ok(Json(caregiver))
}
