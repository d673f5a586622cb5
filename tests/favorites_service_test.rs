// Service-level tests for favorites, run against an in-memory SQLite database.
// Run with: cargo test --test favorites_service_test

mod common;

use common::{seed_character, seed_planet, seed_user, seed_vehicle, setup_db};
use sea_orm::{ActiveValue, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use starwars_favorites_api::{
    entities::{favorite_character, favorite_planet, favorite_vehicle, planet},
    error::AppError,
    services::{FavoriteKind, FavoriteService},
};

#[tokio::test]
async fn add_twice_conflicts_and_keeps_one_row() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;
    let service = FavoriteService::new(&pool);

    let first = service
        .add_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await;
    assert!(first.is_ok(), "First add should succeed");

    let second = service
        .add_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await;
    assert!(
        matches!(second, Err(AppError::Conflict(_))),
        "Second add should conflict"
    );

    let rows = favorite_planet::Entity::find().count(&pool).await.unwrap();
    assert_eq!(rows, 1, "Exactly one join row should exist");
}

#[tokio::test]
async fn add_message_names_target_and_user() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;

    let message = FavoriteService::new(&pool)
        .add_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await
        .unwrap();

    assert_eq!(
        message,
        "The planet Tatooine has been added to luke favorites list"
    );
}

#[tokio::test]
async fn message_falls_back_to_email_without_username() {
    let pool = setup_db().await;
    let user = seed_user(&pool, None, "leia@alderaan.org").await;
    let falcon = seed_vehicle(&pool, "Millennium Falcon", "YT-1300").await;

    let message = FavoriteService::new(&pool)
        .add_favorite(FavoriteKind::Vehicle, user.id, falcon.id)
        .await
        .unwrap();

    assert!(message.contains("Millennium Falcon"));
    assert!(message.contains("leia@alderaan.org"));
}

#[tokio::test]
async fn add_checks_user_before_target() {
    let pool = setup_db().await;
    let service = FavoriteService::new(&pool);

    let err = service
        .add_favorite(FavoriteKind::Planet, 99, 99)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));

    let user = seed_user(&pool, Some("han"), "han@corellia.net").await;
    let err = service
        .add_favorite(FavoriteKind::Planet, user.id, 99)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Planet not found"));

    let rows = favorite_planet::Entity::find().count(&pool).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn remove_missing_favorite_is_not_found_and_changes_nothing() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;
    let hoth = seed_planet(&pool, "Hoth").await;
    let service = FavoriteService::new(&pool);

    service
        .add_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await
        .unwrap();

    let err = service
        .remove_favorite(FavoriteKind::Planet, user.id, hoth.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let favorites = service.list_favorites(user.id).await.unwrap();
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].planet_id, tatooine.id);
}

#[tokio::test]
async fn remove_unknown_user_is_not_found() {
    let pool = setup_db().await;
    let tatooine = seed_planet(&pool, "Tatooine").await;

    let err = FavoriteService::new(&pool)
        .remove_favorite(FavoriteKind::Planet, 42, tatooine.id)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));
}

#[tokio::test]
async fn add_then_remove_leaves_kind_empty() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let yoda = seed_character(&pool, "Yoda").await;
    let service = FavoriteService::new(&pool);

    service
        .add_favorite(FavoriteKind::Character, user.id, yoda.id)
        .await
        .unwrap();
    let message = service
        .remove_favorite(FavoriteKind::Character, user.id, yoda.id)
        .await
        .unwrap();
    assert_eq!(
        message,
        "The character Yoda has been removed from luke favorites list."
    );

    let favorites = service.list_favorites(user.id).await.unwrap();
    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.vehicles.is_empty());
}

#[tokio::test]
async fn remove_keeps_reference_entity() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;
    let service = FavoriteService::new(&pool);

    service
        .add_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await
        .unwrap();
    service
        .remove_favorite(FavoriteKind::Planet, user.id, tatooine.id)
        .await
        .unwrap();

    let still_there = planet::Entity::find_by_id(tatooine.id)
        .one(&pool)
        .await
        .unwrap();
    assert_eq!(still_there, Some(tatooine));
}

#[tokio::test]
async fn favorites_are_scoped_per_user_and_kind() {
    let pool = setup_db().await;
    let luke = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let leia = seed_user(&pool, Some("leia"), "leia@alderaan.org").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;
    let speeder = seed_vehicle(&pool, "Snowspeeder", "t-47 airspeeder").await;
    let service = FavoriteService::new(&pool);

    service
        .add_favorite(FavoriteKind::Planet, luke.id, tatooine.id)
        .await
        .unwrap();
    service
        .add_favorite(FavoriteKind::Planet, leia.id, tatooine.id)
        .await
        .unwrap();
    service
        .add_favorite(FavoriteKind::Vehicle, luke.id, speeder.id)
        .await
        .unwrap();

    let lukes = service.list_favorites(luke.id).await.unwrap();
    assert_eq!(lukes.planets.len(), 1);
    assert_eq!(lukes.vehicles.len(), 1);
    assert!(lukes.characters.is_empty());

    let leias = service.list_favorites(leia.id).await.unwrap();
    assert_eq!(leias.planets.len(), 1);
    assert!(leias.vehicles.is_empty());
}

#[tokio::test]
async fn list_is_ordered_by_row_id() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let hoth = seed_planet(&pool, "Hoth").await;
    let dagobah = seed_planet(&pool, "Dagobah").await;
    let endor = seed_planet(&pool, "Endor").await;
    let service = FavoriteService::new(&pool);

    for target in [&endor, &hoth, &dagobah] {
        service
            .add_favorite(FavoriteKind::Planet, user.id, target.id)
            .await
            .unwrap();
    }

    let favorites = service.list_favorites(user.id).await.unwrap();
    let planet_ids: Vec<i32> = favorites.planets.iter().map(|f| f.planet_id).collect();
    assert_eq!(planet_ids, vec![endor.id, hoth.id, dagobah.id]);
}

#[tokio::test]
async fn list_unknown_user_is_not_found() {
    let pool = setup_db().await;

    let result = FavoriteService::new(&pool).list_favorites(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn uncommitted_transaction_is_rolled_back() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let falcon = seed_vehicle(&pool, "Millennium Falcon", "YT-1300").await;

    {
        let txn = pool.begin().await.unwrap();
        FavoriteService::new(&txn)
            .add_favorite(FavoriteKind::Vehicle, user.id, falcon.id)
            .await
            .unwrap();
        txn.rollback().await.unwrap();
    }

    let rows = favorite_vehicle::Entity::find().count(&pool).await.unwrap();
    assert_eq!(rows, 0, "Rolled back favorite should not persist");
}

fn assert_unique_violation(second: Result<(), DbErr>, table: &str) {
    let err = second.expect_err(&format!("Duplicate row in {} should be rejected", table));
    let mapped = AppError::from_insert(err, "duplicate favorite");
    assert!(
        matches!(mapped, AppError::Conflict(ref msg) if msg == "duplicate favorite"),
        "Duplicate row in {} should map to Conflict, got {:?}",
        table,
        mapped
    );
}

#[tokio::test]
async fn join_tables_reject_duplicate_pairs() {
    let pool = setup_db().await;
    let user = seed_user(&pool, Some("luke"), "luke@tatooine.net").await;
    let yoda = seed_character(&pool, "Yoda").await;
    let tatooine = seed_planet(&pool, "Tatooine").await;
    let falcon = seed_vehicle(&pool, "Millennium Falcon", "YT-1300").await;

    let character_link = || favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        character_id: ActiveValue::Set(yoda.id),
        ..Default::default()
    };
    favorite_character::Entity::insert(character_link())
        .exec(&pool)
        .await
        .unwrap();
    let second = favorite_character::Entity::insert(character_link())
        .exec(&pool)
        .await
        .map(|_| ());
    assert_unique_violation(second, "favorite_characters");

    let planet_link = || favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        planet_id: ActiveValue::Set(tatooine.id),
        ..Default::default()
    };
    favorite_planet::Entity::insert(planet_link())
        .exec(&pool)
        .await
        .unwrap();
    let second = favorite_planet::Entity::insert(planet_link())
        .exec(&pool)
        .await
        .map(|_| ());
    assert_unique_violation(second, "favorite_planets");

    let vehicle_link = || favorite_vehicle::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        vehicle_id: ActiveValue::Set(falcon.id),
        ..Default::default()
    };
    favorite_vehicle::Entity::insert(vehicle_link())
        .exec(&pool)
        .await
        .unwrap();
    let second = favorite_vehicle::Entity::insert(vehicle_link())
        .exec(&pool)
        .await
        .map(|_| ());
    assert_unique_violation(second, "favorite_vehicles");

    assert_eq!(favorite_character::Entity::find().count(&pool).await.unwrap(), 1);
    assert_eq!(favorite_planet::Entity::find().count(&pool).await.unwrap(), 1);
    assert_eq!(favorite_vehicle::Entity::find().count(&pool).await.unwrap(), 1);
}
