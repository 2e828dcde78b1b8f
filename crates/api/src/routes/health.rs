//! Liveness endpoint, mounted at the root so load balancers and container
//! probes can hit it without the `/api/v1` prefix or a session token.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub db_healthy: bool,
    pub version: &'static str,
}

/// GET /health
///
/// Probes the database with a trivial query; the service itself responding
/// is the liveness signal.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = prancha_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        db_healthy,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
