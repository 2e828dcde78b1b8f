//! Route definitions for child profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::children;
use crate::state::AppState;

/// Child routes mounted at `/children`.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(children::list).post(children::create))
}
