pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
pub mod vehicles;

use crate::models::{
    CharacterDetailResponse, CharacterResponse, CreateUserRequest, ErrorResponse,
    FavoriteCharacterResponse, FavoritePlanetResponse, FavoriteVehicleResponse, MessageResponse,
    MsgResponse, PeopleResponse, PlanetDetailResponse, PlanetResponse, PlanetsResponse,
    UserDetailResponse, UserFavoritesResponse, UserResponse, UsersResponse,
    VehicleDetailResponse, VehicleResponse, VehiclesResponse,
};
use crate::error::AppError;
use actix_web::web;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reference data
        people::get_people,
        people::get_person,
        planets::get_planets,
        planets::get_planet,
        vehicles::get_vehicles,
        vehicles::get_vehicle,
        // Users
        users::get_users,
        users::get_user,
        users::get_user_favorites,
        users::create_user,
        // Favorites
        favorites::add_favorite_planet,
        favorites::add_favorite_person,
        favorites::add_favorite_vehicle,
        favorites::delete_favorite_planet,
        favorites::delete_favorite_person,
        favorites::delete_favorite_vehicle,
    ),
    components(schemas(
        CharacterResponse,
        CharacterDetailResponse,
        PeopleResponse,
        PlanetResponse,
        PlanetDetailResponse,
        PlanetsResponse,
        VehicleResponse,
        VehicleDetailResponse,
        VehiclesResponse,
        CreateUserRequest,
        UserResponse,
        UserDetailResponse,
        UsersResponse,
        FavoriteCharacterResponse,
        FavoritePlanetResponse,
        FavoriteVehicleResponse,
        UserFavoritesResponse,
        MessageResponse,
        MsgResponse,
        ErrorResponse,
    )),
    tags(
        (name = "people", description = "Star Wars characters"),
        (name = "planets", description = "Star Wars planets"),
        (name = "vehicles", description = "Star Wars vehicles"),
        (name = "user", description = "User accounts and their favorites"),
        (name = "favorite", description = "Favorite management for the user in the user_id header"),
    ),
)]
pub struct ApiDoc;

/// Registers every API route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/people", web::get().to(people::get_people))
        .route("/people/{people_id}", web::get().to(people::get_person))
        .route("/planets", web::get().to(planets::get_planets))
        .route("/planets/{planet_id}", web::get().to(planets::get_planet))
        .route("/vehicles", web::get().to(vehicles::get_vehicles))
        .route("/vehicles/{vehicle_id}", web::get().to(vehicles::get_vehicle))
        .route("/user", web::get().to(users::get_users))
        .route("/user", web::post().to(users::create_user))
        .route("/user/{user_id}", web::get().to(users::get_user))
        .route(
            "/user/{user_id}/favorites",
            web::get().to(users::get_user_favorites),
        )
        .service(
            web::scope("/favorite")
                .route(
                    "/planet/{planet_id}",
                    web::post().to(favorites::add_favorite_planet),
                )
                .route(
                    "/planet/{planet_id}",
                    web::delete().to(favorites::delete_favorite_planet),
                )
                .route(
                    "/people/{people_id}",
                    web::post().to(favorites::add_favorite_person),
                )
                .route(
                    "/person/{people_id}",
                    web::delete().to(favorites::delete_favorite_person),
                )
                .route(
                    "/vehicle/{vehicle_id}",
                    web::post().to(favorites::add_favorite_vehicle),
                )
                .route(
                    "/vehicle/{vehicle_id}",
                    web::delete().to(favorites::delete_favorite_vehicle),
                ),
        );
}

/// Malformed, mistyped or non-JSON bodies answer with the usual error body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}

/// A path id that is not an integer cannot name any row.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(format!("Invalid id: {}", err)).into())
}
