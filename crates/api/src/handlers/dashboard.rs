//! Dashboard summary handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::AppResult;
use crate::middleware::auth::SessionCaregiver;
use crate::response::DataResponse;
use crate::state::AppState;

/// Live entity counts for one caregiver.
#[derive(Debug, FromRow)]
struct BoardCountsRow {
    n_children: i64,
    n_categories: i64,
    n_cards: i64,
}

/// Payload for the dashboard screen.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub caregiver_name: String,
    pub n_children: i64,
    pub n_categories: i64,
    pub n_cards: i64,
}

/// GET /api/v1/dashboard
///
/// Greeting name plus live counts of the caregiver's children, categories,
/// and cards. Counts are computed per request, never cached.
pub async fn summary(
    session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let counts = sqlx::query_as::<_, BoardCountsRow>(
        "SELECT
            (SELECT COUNT(*) FROM children WHERE caregiver_id = $1) AS n_children,
            (SELECT COUNT(*) FROM categories WHERE caregiver_id = $1) AS n_categories,
            (SELECT COUNT(*) FROM cards
               JOIN categories ON categories.id = cards.category_id
              WHERE categories.caregiver_id = $1) AS n_cards",
    )
    .bind(session.caregiver_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            caregiver_name: session.display_name,
            n_children: counts.n_children,
            n_categories: counts.n_categories,
            n_cards: counts.n_cards,
        },
    }))
}
