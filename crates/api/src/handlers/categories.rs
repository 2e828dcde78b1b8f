//! Handlers for the `/categories` resource.
//!
//! Every operation is scoped to the session's caregiver: a category id that
//! exists but belongs to someone else is indistinguishable from a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prancha_core::error::CoreError;
use prancha_core::types::DbId;
use prancha_db::models::category::{Category, CreateCategory, UpdateCategory};
use prancha_db::repositories::CategoryRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::SessionCaregiver;
use crate::state::AppState;

/// Request body for `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub color: Option<String>,
}

/// GET /api/v1/categories
///
/// List the caregiver's categories ordered by (sort_order, name).
pub async fn list(
    session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_by_caregiver(&state.pool, session.caregiver_id).await?;
    Ok(Json(categories))
}

/// POST /api/v1/categories
///
/// Create a category. Name is required; a blank color falls back to the
/// column default.
pub async fn create(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Json(input): Json<CategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name is required".into(),
        )));
    }

    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            caregiver_id: session.caregiver_id,
            name: name.to_string(),
            color: non_blank(input.color),
        },
    )
    .await?;

    tracing::info!(
        category_id = category.id,
        caregiver_id = session.caregiver_id,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/categories/{id}
///
/// Update a category's name and/or color. Blank fields leave the stored
/// values unchanged.
pub async fn update(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let patch = UpdateCategory {
        name: non_blank(input.name),
        color: non_blank(input.color),
    };

    let category =
        CategoryRepo::update_for_caregiver(&state.pool, session.caregiver_id, id, &patch)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            }))?;

    tracing::info!(
        category_id = id,
        caregiver_id = session.caregiver_id,
        "Category updated",
    );

    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
///
/// Delete a category and, via the foreign key, all of its cards.
pub async fn delete(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete_for_caregiver(&state.pool, session.caregiver_id, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(
        category_id = id,
        caregiver_id = session.caregiver_id,
        "Category deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
