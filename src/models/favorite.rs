use crate::entities::{favorite_character, favorite_planet, favorite_vehicle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoriteCharacterResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl From<favorite_character::Model> for FavoriteCharacterResponse {
    fn from(row: favorite_character::Model) -> Self {
        FavoriteCharacterResponse {
            id: row.id,
            user_id: row.user_id,
            character_id: row.character_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<favorite_planet::Model> for FavoritePlanetResponse {
    fn from(row: favorite_planet::Model) -> Self {
        FavoritePlanetResponse {
            id: row.id,
            user_id: row.user_id,
            planet_id: row.planet_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoriteVehicleResponse {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
}

impl From<favorite_vehicle::Model> for FavoriteVehicleResponse {
    fn from(row: favorite_vehicle::Model) -> Self {
        FavoriteVehicleResponse {
            id: row.id,
            user_id: row.user_id,
            vehicle_id: row.vehicle_id,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesResponse {
    pub favorite_characters: Vec<FavoriteCharacterResponse>,
    pub favorite_planets: Vec<FavoritePlanetResponse>,
    pub favorite_vehicles: Vec<FavoriteVehicleResponse>,
}
