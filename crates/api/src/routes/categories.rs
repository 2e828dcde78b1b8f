//! Route definitions for categories and their cards.

use axum::routing::get;
use axum::Router;

use crate::handlers::{cards, categories};
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete (cascades to cards)
/// GET    /{id}/cards              -> cards::list
/// POST   /{id}/cards              -> cards::create
/// DELETE /{id}/cards/{card_id}    -> cards::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            axum::routing::put(categories::update).delete(categories::delete),
        )
        .route("/{id}/cards", get(cards::list).post(cards::create))
        .route("/{id}/cards/{card_id}", axum::routing::delete(cards::delete))
}

/// The board landing screen, mounted at the API root.
///
/// ```text
/// GET /board -> cards::landing (seeds starter categories)
/// ```
pub fn board_router() -> Router<AppState> {
    Router::new().route("/board", get(cards::landing))
}
