//! Route definitions for the preferences screen.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes mounted at `/settings`.
///
/// ```text
/// GET /  -> get
/// PUT /  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get).put(settings::update))
}
