//! Handlers for the card board: the category landing screen and the
//! per-category card list.
//!
//! The landing screen seeds the fixed starter categories on every visit, so a
//! caregiver who deletes one of them gets it back the next time they open the
//! board.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prancha_core::defaults::{default_category_emoji, DEFAULT_CARD_EMOJI, FALLBACK_CARD_COLOR};
use prancha_core::error::CoreError;
use prancha_core::types::DbId;
use prancha_db::models::card::{Card, CreateCard};
use prancha_db::models::category::Category;
use prancha_db::repositories::{CardRepo, CategoryRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::middleware::auth::SessionCaregiver;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum length of a card's spoken phrase, in characters.
const MAX_PHRASE_CHARS: usize = 240;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /categories/{id}/cards`.
#[derive(Debug, Deserialize)]
pub struct CardRequest {
    pub label: String,
    pub emoji: Option<String>,
    pub color: Option<String>,
    pub phrase: Option<String>,
}

/// Category entry on the board landing screen, decorated with the display
/// emoji for the well-known starter names.
#[derive(Debug, Serialize)]
pub struct LandingCategory {
    #[serde(flatten)]
    pub category: Category,
    pub emoji: Option<&'static str>,
}

/// A category together with its cards.
#[derive(Debug, Serialize)]
pub struct CategoryCards {
    pub category: Category,
    pub cards: Vec<Card>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/board
///
/// The board landing screen: seed any missing starter categories, then list
/// all of the caregiver's categories.
pub async fn landing(
    session: SessionCaregiver,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LandingCategory>>>> {
    let created = CategoryRepo::ensure_defaults(&state.pool, session.caregiver_id).await?;
    if created > 0 {
        tracing::info!(
            caregiver_id = session.caregiver_id,
            created,
            "Seeded starter categories",
        );
    }

    let categories = CategoryRepo::list_by_caregiver(&state.pool, session.caregiver_id).await?;
    let data = categories
        .into_iter()
        .map(|category| LandingCategory {
            emoji: default_category_emoji(&category.name),
            category,
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/categories/{id}/cards
///
/// List a category's cards, ordered by (sort_order, label). 404 when the
/// category is missing or owned by another caregiver.
pub async fn list(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<Json<CategoryCards>> {
    let category = CategoryRepo::find_for_caregiver(&state.pool, session.caregiver_id, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let cards = CardRepo::list_by_category(&state.pool, category.id).await?;
    Ok(Json(CategoryCards { category, cards }))
}

/// POST /api/v1/categories/{id}/cards
///
/// Create a card. Emoji defaults to a placeholder glyph; color falls back to
/// the category's color, then to a fixed light blue. Both are resolved here,
/// at creation time, so later category edits never restyle existing cards.
pub async fn create(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<CardRequest>,
) -> AppResult<(StatusCode, Json<Card>)> {
    let category = CategoryRepo::find_for_caregiver(&state.pool, session.caregiver_id, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let label = input.label.trim();
    if label.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Card label is required".into(),
        )));
    }

    let phrase = non_blank(input.phrase);
    if let Some(ref phrase) = phrase {
        if phrase.chars().count() > MAX_PHRASE_CHARS {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Card phrase must be at most {MAX_PHRASE_CHARS} characters"
            ))));
        }
    }

    let emoji = non_blank(input.emoji).unwrap_or_else(|| DEFAULT_CARD_EMOJI.to_string());
    let color = non_blank(input.color)
        .or_else(|| category.color.clone())
        .unwrap_or_else(|| FALLBACK_CARD_COLOR.to_string());

    let card = CardRepo::create(
        &state.pool,
        &CreateCard {
            category_id: category.id,
            label: label.to_string(),
            emoji,
            color,
            phrase,
        },
    )
    .await?;

    tracing::info!(
        card_id = card.id,
        category_id = category.id,
        caregiver_id = session.caregiver_id,
        "Card created",
    );

    Ok((StatusCode::CREATED, Json(card)))
}

/// DELETE /api/v1/categories/{category_id}/cards/{card_id}
///
/// Delete a card. The delete only fires when the card belongs to the category
/// and the category belongs to the caregiver; any broken link is a 404.
pub async fn delete(
    session: SessionCaregiver,
    State(state): State<AppState>,
    Path((category_id, card_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted =
        CardRepo::delete_scoped(&state.pool, session.caregiver_id, category_id, card_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }));
    }

    tracing::info!(
        card_id,
        category_id,
        caregiver_id = session.caregiver_id,
        "Card deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
