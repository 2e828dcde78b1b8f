//! Preferences screen handlers.
//!
//! Preferences (voice rate, board layout) live in client-side storage; the
//! server only reports that fact so the client knows not to expect a
//! persisted copy.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::SessionCaregiver;
use crate::response::DataResponse;

/// Tells the client where preferences are persisted.
#[derive(Debug, Serialize)]
pub struct SettingsInfo {
    pub server_persisted: bool,
}

/// GET /api/v1/settings
pub async fn get(_session: SessionCaregiver) -> AppResult<Json<DataResponse<SettingsInfo>>> {
    Ok(Json(DataResponse {
        data: SettingsInfo {
            server_persisted: false,
        },
    }))
}

/// PUT /api/v1/settings
///
/// Accepts any JSON payload and acknowledges it without storing anything.
pub async fn update(
    session: SessionCaregiver,
    Json(_preferences): Json<serde_json::Value>,
) -> AppResult<StatusCode> {
    tracing::debug!(
        caregiver_id = session.caregiver_id,
        "Preferences acknowledged (client-side storage)",
    );
    Ok(StatusCode::NO_CONTENT)
}
