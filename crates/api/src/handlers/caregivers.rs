//! Caregiver directory handler.

use axum::extract::State;
use axum::Json;
use prancha_db::models::caregiver::Caregiver;
use prancha_db::repositories::CaregiverRepo;

use crate::error::AppResult;
use crate::middleware::auth::SessionCaregiver;
use crate::state::AppState;

/// GET /api/v1/caregivers
///
/// List every registered caregiver, ordered by name. This is a small-scale
/// directory for shared deployments (a clinic or family group), so it is not
/// scoped to the requesting caregiver.
pub async fn list(
    _session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Caregiver>>> {
    let caregivers = CaregiverRepo::list(&state.pool).await?;
    Ok(Json(caregivers))
}
