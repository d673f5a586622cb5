// Shared fixtures for the integration tests: an in-memory SQLite database with
// the full schema, seeders for reference data, and the real route table.
#![allow(dead_code)]

use actix_web::{web, App};
use sea_orm::{ActiveValue, EntityTrait};
use starwars_favorites_api::{
    api,
    db::{self, DbPool},
    entities::{character, planet, user, vehicle},
};

/// Fresh in-memory database with every table created.
pub async fn setup_db() -> DbPool {
    db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory database")
}

/// Helper function to create a test app backed by `pool`
pub fn create_test_app(
    pool: DbPool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(pool))
        .configure(api::configure)
}

pub async fn seed_user(pool: &DbPool, username: Option<&str>, email: &str) -> user::Model {
    user::Entity::insert(user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        username: ActiveValue::Set(username.map(str::to_string)),
        password: ActiveValue::Set("secret".to_string()),
        is_active: ActiveValue::Set(true),
        ..Default::default()
    })
    .exec_with_returning(pool)
    .await
    .expect("Failed to seed user")
}

pub async fn seed_character(pool: &DbPool, name: &str) -> character::Model {
    character::Entity::insert(character::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        eye_color: ActiveValue::Set(Some("blue".to_string())),
        hair_color: ActiveValue::Set(Some("blond".to_string())),
        ..Default::default()
    })
    .exec_with_returning(pool)
    .await
    .expect("Failed to seed character")
}

pub async fn seed_planet(pool: &DbPool, name: &str) -> planet::Model {
    planet::Entity::insert(planet::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    })
    .exec_with_returning(pool)
    .await
    .expect("Failed to seed planet")
}

pub async fn seed_vehicle(pool: &DbPool, name: &str, model: &str) -> vehicle::Model {
    vehicle::Entity::insert(vehicle::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        model: ActiveValue::Set(model.to_string()),
        ..Default::default()
    })
    .exec_with_returning(pool)
    .await
    .expect("Failed to seed vehicle")
}
