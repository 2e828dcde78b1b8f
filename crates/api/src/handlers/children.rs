//! Handlers for the `/children` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prancha_core::error::CoreError;
use prancha_db::models::child::{Child, CreateChild};
use prancha_db::repositories::ChildRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::SessionCaregiver;
use crate::state::AppState;

/// Request body for `POST /children`. The owning caregiver always comes from
/// the session, never from the body.
#[derive(Debug, Deserialize)]
pub struct ChildRequest {
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub note: Option<String>,
}

/// GET /api/v1/children
///
/// List the caregiver's children ordered by name.
pub async fn list(
    session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Child>>> {
    let children = ChildRepo::list_by_caregiver(&state.pool, session.caregiver_id).await?;
    Ok(Json(children))
}

/// POST /api/v1/children
///
/// Create a child profile. Name is required; age, gender, and note are free
/// text.
pub async fn create(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Json(input): Json<ChildRequest>,
) -> AppResult<(StatusCode, Json<Child>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Child name is required".into(),
        )));
    }

    let child = ChildRepo::create(
        &state.pool,
        &CreateChild {
            caregiver_id: session.caregiver_id,
            name: name.to_string(),
            age: non_blank(input.age),
            gender: non_blank(input.gender),
            note: non_blank(input.note),
        },
    )
    .await?;

    tracing::info!(
        child_id = child.id,
        caregiver_id = session.caregiver_id,
        "Child profile created",
    );

    Ok((StatusCode::CREATED, Json(child)))
}
