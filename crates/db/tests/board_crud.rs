//! Repository-level integration tests for the board schema: entity CRUD,
//! caregiver scoping, cascade deletes, and starter-category seeding.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use prancha_db::models::caregiver::CreateCaregiver;
use prancha_db::models::card::CreateCard;
use prancha_db::models::category::{CreateCategory, UpdateCategory};
use prancha_db::models::child::CreateChild;
use prancha_db::models::session::CreateSession;
use prancha_db::repositories::{CardRepo, CaregiverRepo, CategoryRepo, ChildRepo, SessionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_caregiver(pool: &PgPool, name: &str, email: &str) -> i64 {
    CaregiverRepo::create(
        pool,
        &CreateCaregiver {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .await
    .expect("caregiver creation should succeed")
    .id
}

async fn create_category(pool: &PgPool, caregiver_id: i64, name: &str, color: Option<&str>) -> i64 {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            caregiver_id,
            name: name.to_string(),
            color: color.map(String::from),
        },
    )
    .await
    .expect("category creation should succeed")
    .id
}

async fn create_card(pool: &PgPool, category_id: i64, label: &str) -> i64 {
    CardRepo::create(
        pool,
        &CreateCard {
            category_id,
            label: label.to_string(),
            emoji: "🧩".to_string(),
            color: "#cfeeff".to_string(),
            phrase: None,
        },
    )
    .await
    .expect("card creation should succeed")
    .id
}

async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count should succeed")
}

// ---------------------------------------------------------------------------
// Entity hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_hierarchy_create(pool: PgPool) {
    let caregiver_id = create_caregiver(&pool, "Ana", "ana@example.com").await;

    let child = ChildRepo::create(
        &pool,
        &CreateChild {
            caregiver_id,
            name: "Bia".to_string(),
            age: Some("6".to_string()),
            gender: None,
            note: None,
        },
    )
    .await
    .expect("child creation should succeed");
    assert_eq!(child.caregiver_id, caregiver_id);

    let category_id = create_category(&pool, caregiver_id, "Comida", Some("#ff8800")).await;
    let card_id = create_card(&pool, category_id, "Água").await;
    assert!(card_id > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    create_caregiver(&pool, "Ana", "ana@example.com").await;

    let result = CaregiverRepo::create(
        &pool,
        &CreateCaregiver {
            name: "Other".to_string(),
            email: "ana@example.com".to_string(),
        },
    )
    .await;
    assert!(result.is_err(), "duplicate email must violate uq_caregivers_email");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_rejected_per_caregiver(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let bob = create_caregiver(&pool, "Bob", "bob@example.com").await;
    create_category(&pool, ana, "Comida", None).await;

    let result = CategoryRepo::create(
        &pool,
        &CreateCategory {
            caregiver_id: ana,
            name: "Comida".to_string(),
            color: None,
        },
    )
    .await;
    assert!(
        result.is_err(),
        "duplicate name must violate uq_categories_caregiver_name"
    );

    // The constraint is per caregiver, not global.
    create_category(&pool, bob, "Comida", None).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_child_requires_existing_caregiver(pool: PgPool) {
    let result = ChildRepo::create(
        &pool,
        &CreateChild {
            caregiver_id: 999_999,
            name: "Orphan".to_string(),
            age: None,
            gender: None,
            note: None,
        },
    )
    .await;
    assert!(result.is_err(), "foreign key must reject a missing caregiver");
}

// ---------------------------------------------------------------------------
// Cascade deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_delete_cascades_to_cards(pool: PgPool) {
    let caregiver_id = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let category_id = create_category(&pool, caregiver_id, "Comida", None).await;
    create_card(&pool, category_id, "Água").await;
    create_card(&pool, category_id, "Pão").await;

    let deleted = CategoryRepo::delete_for_caregiver(&pool, caregiver_id, category_id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    assert_eq!(count_rows(&pool, "cards").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_caregiver_delete_cascades_everywhere(pool: PgPool) {
    let caregiver_id = create_caregiver(&pool, "Ana", "ana@example.com").await;

    ChildRepo::create(
        &pool,
        &CreateChild {
            caregiver_id,
            name: "Bia".to_string(),
            age: None,
            gender: None,
            note: None,
        },
    )
    .await
    .expect("child creation should succeed");

    let category_id = create_category(&pool, caregiver_id, "Comida", None).await;
    create_card(&pool, category_id, "Água").await;

    SessionRepo::create(
        &pool,
        &CreateSession {
            caregiver_id,
            token_hash: "a".repeat(64),
            caregiver_name: "Ana".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .expect("session creation should succeed");

    let deleted = CaregiverRepo::delete(&pool, caregiver_id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    assert_eq!(count_rows(&pool, "children").await, 0);
    assert_eq!(count_rows(&pool, "categories").await, 0);
    assert_eq!(count_rows(&pool, "cards").await, 0);
    assert_eq!(count_rows(&pool, "sessions").await, 0);
}

// ---------------------------------------------------------------------------
// Caregiver scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_mutations_scoped_to_owner(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let bob = create_caregiver(&pool, "Bob", "bob@example.com").await;
    let category_id = create_category(&pool, ana, "Comida", None).await;

    let patch = UpdateCategory {
        name: Some("Hijacked".to_string()),
        color: None,
    };
    let updated = CategoryRepo::update_for_caregiver(&pool, bob, category_id, &patch)
        .await
        .expect("query should succeed");
    assert!(updated.is_none());

    let deleted = CategoryRepo::delete_for_caregiver(&pool, bob, category_id)
        .await
        .expect("query should succeed");
    assert!(!deleted);

    let found = CategoryRepo::find_for_caregiver(&pool, bob, category_id)
        .await
        .expect("query should succeed");
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_card_delete_requires_full_chain(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let bob = create_caregiver(&pool, "Bob", "bob@example.com").await;
    let comida = create_category(&pool, ana, "Comida", None).await;
    let rotina = create_category(&pool, ana, "Rotina", None).await;
    let card_id = create_card(&pool, comida, "Água").await;

    // Wrong category.
    assert!(!CardRepo::delete_scoped(&pool, ana, rotina, card_id)
        .await
        .expect("query should succeed"));

    // Wrong caregiver.
    assert!(!CardRepo::delete_scoped(&pool, bob, comida, card_id)
        .await
        .expect("query should succeed"));

    // Correct chain.
    assert!(CardRepo::delete_scoped(&pool, ana, comida, card_id)
        .await
        .expect("query should succeed"));
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listings_are_ordered(pool: PgPool) {
    create_caregiver(&pool, "Zoe", "zoe@example.com").await;
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;

    create_category(&pool, ana, "Rotina", None).await;
    let comida = create_category(&pool, ana, "Comida", None).await;

    create_card(&pool, comida, "Suco").await;
    create_card(&pool, comida, "Agua").await;

    let caregivers = CaregiverRepo::list(&pool).await.expect("list should succeed");
    let names: Vec<_> = caregivers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Zoe"]);

    let categories = CategoryRepo::list_by_caregiver(&pool, ana)
        .await
        .expect("list should succeed");
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Comida", "Rotina"]);

    let cards = CardRepo::list_by_category(&pool, comida)
        .await
        .expect("list should succeed");
    let labels: Vec<_> = cards.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Agua", "Suco"]);
}

// ---------------------------------------------------------------------------
// Starter-category seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_defaults_seeds_once(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;

    let created = CategoryRepo::ensure_defaults(&pool, ana)
        .await
        .expect("seeding should succeed");
    assert_eq!(created, 5);

    let created = CategoryRepo::ensure_defaults(&pool, ana)
        .await
        .expect("seeding should succeed");
    assert_eq!(created, 0);

    assert_eq!(count_rows(&pool, "categories").await, 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_defaults_keeps_manual_category(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    create_category(&pool, ana, "Rotina", Some("#123456")).await;

    let created = CategoryRepo::ensure_defaults(&pool, ana)
        .await
        .expect("seeding should succeed");
    assert_eq!(created, 4);

    let categories = CategoryRepo::list_by_caregiver(&pool, ana)
        .await
        .expect("list should succeed");
    let rotina = categories
        .iter()
        .find(|c| c.name == "Rotina")
        .expect("Rotina should exist");
    assert_eq!(rotina.color.as_deref(), Some("#123456"));
}

/// Seeding is per caregiver: one caregiver's categories never leak into
/// another's board.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ensure_defaults_is_per_caregiver(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let bob = create_caregiver(&pool, "Bob", "bob@example.com").await;

    CategoryRepo::ensure_defaults(&pool, ana)
        .await
        .expect("seeding should succeed");

    let bobs = CategoryRepo::list_by_caregiver(&pool, bob)
        .await
        .expect("list should succeed");
    assert!(bobs.is_empty());
}

// ---------------------------------------------------------------------------
// Profile updates and sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;

    let updated = CaregiverRepo::update_profile(&pool, ana, "Ana Maria", "ana.m@example.com")
        .await
        .expect("update should succeed")
        .expect("caregiver should exist");
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.email, "ana.m@example.com");

    let missing = CaregiverRepo::update_profile(&pool, 999_999, "X", "x@example.com")
        .await
        .expect("query should succeed");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lifecycle(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let hash = "b".repeat(64);

    SessionRepo::create(
        &pool,
        &CreateSession {
            caregiver_id: ana,
            token_hash: hash.clone(),
            caregiver_name: "Ana".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .expect("session creation should succeed");

    let session = SessionRepo::find_active_by_token_hash(&pool, &hash)
        .await
        .expect("query should succeed")
        .expect("session should be active");
    assert_eq!(session.caregiver_name, "Ana");

    let refreshed = SessionRepo::refresh_display_name(&pool, ana, "Ana Maria")
        .await
        .expect("refresh should succeed");
    assert_eq!(refreshed, 1);

    let revoked = SessionRepo::revoke_all_for_caregiver(&pool, ana)
        .await
        .expect("revoke should succeed");
    assert_eq!(revoked, 1);

    let gone = SessionRepo::find_active_by_token_hash(&pool, &hash)
        .await
        .expect("query should succeed");
    assert!(gone.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_is_not_active(pool: PgPool) {
    let ana = create_caregiver(&pool, "Ana", "ana@example.com").await;
    let hash = "c".repeat(64);

    SessionRepo::create(
        &pool,
        &CreateSession {
            caregiver_id: ana,
            token_hash: hash.clone(),
            caregiver_name: "Ana".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .expect("session creation should succeed");

    let found = SessionRepo::find_active_by_token_hash(&pool, &hash)
        .await
        .expect("query should succeed");
    assert!(found.is_none());
}
