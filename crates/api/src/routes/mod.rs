pub mod account;
pub mod auth;
pub mod caregivers;
pub mod categories;
pub mod children;
pub mod dashboard;
pub mod health;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
/// /auth/logout                             logout (requires session)
///
/// /dashboard                               greeting + entity counts (GET)
///
/// /children                                list, create (GET, POST)
///
/// /categories                              list, create (GET, POST)
/// /categories/{id}                         update, delete (PUT, DELETE)
/// /categories/{id}/cards                   list, create (GET, POST)
/// /categories/{id}/cards/{card_id}         delete (DELETE)
///
/// /board                                   landing screen: seed + list categories (GET)
///
/// /caregivers                              directory listing (GET)
///
/// /account                                 own profile (GET, PUT)
///
/// /settings                                preferences screen (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/children", children::router())
        .nest("/categories", categories::router())
        .nest("/caregivers", caregivers::router())
        .nest("/account", account::router())
        .nest("/settings", settings::router())
        .merge(categories::board_router())
}
