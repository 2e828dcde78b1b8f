//! Route definitions for the caregiver directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::caregivers;
use crate::state::AppState;

/// Caregiver directory routes mounted at `/caregivers`.
///
/// ```text
/// GET /  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(caregivers::list))
}
