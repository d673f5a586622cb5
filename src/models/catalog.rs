//! Response shapes for the read-only reference data: characters, planets
//! and vehicles.

use crate::entities::{character, planet, vehicle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

impl From<character::Model> for CharacterResponse {
    fn from(character: character::Model) -> Self {
        CharacterResponse {
            id: character.id,
            name: character.name,
            eye_color: character.eye_color,
            hair_color: character.hair_color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
}

impl From<planet::Model> for PlanetResponse {
    fn from(planet: planet::Model) -> Self {
        PlanetResponse {
            id: planet.id,
            name: planet.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct VehicleResponse {
    pub id: i32,
    pub name: String,
    pub model: String,
}

impl From<vehicle::Model> for VehicleResponse {
    fn from(vehicle: vehicle::Model) -> Self {
        VehicleResponse {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PeopleResponse {
    pub people: Vec<CharacterResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CharacterDetailResponse {
    pub msg: String,
    pub data: CharacterResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetsResponse {
    pub planets: Vec<PlanetResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetDetailResponse {
    pub msg: String,
    pub data: PlanetResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleDetailResponse {
    pub msg: String,
    pub data: VehicleResponse,
}
