//! Favorites: the join rows linking a user to characters, planets and
//! vehicles.
//!
//! The service works against any [`ConnectionTrait`], so handlers hand it a
//! request-scoped transaction and decide whether to commit. Each operation
//! touches at most one join row.

use std::fmt;

use crate::entities::{
    character, favorite_character, favorite_planet, favorite_vehicle, planet, user, vehicle,
};
use crate::error::AppError;
use crate::models::UserFavoritesResponse;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// The kind of reference entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    fn title(self) -> &'static str {
        match self {
            FavoriteKind::Character => "Character",
            FavoriteKind::Planet => "Planet",
            FavoriteKind::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FavoriteKind::Character => "character",
            FavoriteKind::Planet => "planet",
            FavoriteKind::Vehicle => "vehicle",
        };
        f.write_str(label)
    }
}

/// All favorites of one user, each list ordered by join row id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFavorites {
    pub characters: Vec<favorite_character::Model>,
    pub planets: Vec<favorite_planet::Model>,
    pub vehicles: Vec<favorite_vehicle::Model>,
}

impl From<UserFavorites> for UserFavoritesResponse {
    fn from(favorites: UserFavorites) -> Self {
        UserFavoritesResponse {
            favorite_characters: favorites.characters.into_iter().map(Into::into).collect(),
            favorite_planets: favorites.planets.into_iter().map(Into::into).collect(),
            favorite_vehicles: favorites.vehicles.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct FavoriteService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every favorite of `user_id`.
    ///
    /// Fails with `NotFound` when the user does not exist.
    pub async fn list_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        self.require_user(user_id).await?;

        let characters = favorite_character::Entity::find()
            .filter(favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(favorite_character::Column::Id)
            .all(self.db)
            .await?;

        let planets = favorite_planet::Entity::find()
            .filter(favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(favorite_planet::Column::Id)
            .all(self.db)
            .await?;

        let vehicles = favorite_vehicle::Entity::find()
            .filter(favorite_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(favorite_vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(UserFavorites {
            characters,
            planets,
            vehicles,
        })
    }

    /// Marks `target_id` as a favorite of `user_id`.
    ///
    /// The user is checked before the target. An existing favorite yields
    /// `Conflict` and nothing is written. Returns the confirmation message.
    pub async fn add_favorite(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<String, AppError> {
        let user = self.require_user(user_id).await?;

        let target_name = self
            .target_name(kind, target_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", kind.title())))?;

        let duplicate = || AppError::Conflict(format!("{} is in the list of favorites", kind));

        if self.find_link(kind, user_id, target_id).await?.is_some() {
            return Err(duplicate());
        }

        // A concurrent request may have inserted the same pair since the
        // check above; the unique index turns that into a conflict.
        self.insert_link(kind, user_id, target_id)
            .await
            .map_err(|e| AppError::from_insert(e, duplicate().to_string()))?;

        log::info!(
            "User {} added {} {} to favorites",
            user_id,
            kind,
            target_id
        );

        Ok(format!(
            "The {} {} has been added to {} favorites list",
            kind,
            target_name,
            user.display_name()
        ))
    }

    /// Removes the favorite linking `user_id` to `target_id`.
    ///
    /// Fails with `NotFound` when the user does not exist or the pair is not
    /// a favorite. The referenced entity is left untouched.
    pub async fn remove_favorite(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<String, AppError> {
        let user = self.require_user(user_id).await?;

        let link_id = self
            .find_link(kind, user_id, target_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} is not in the list of favorites", kind))
            })?;

        self.delete_link(kind, link_id).await?;

        let target_name = self
            .target_name(kind, target_id)
            .await?
            .unwrap_or_else(|| format!("#{}", target_id));

        log::info!(
            "User {} removed {} {} from favorites",
            user_id,
            kind,
            target_id
        );

        Ok(format!(
            "The {} {} has been removed from {} favorites list.",
            kind,
            target_name,
            user.display_name()
        ))
    }

    async fn require_user(&self, user_id: i32) -> Result<user::Model, AppError> {
        user::Entity::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn target_name(
        &self,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<Option<String>, DbErr> {
        let name = match kind {
            FavoriteKind::Character => character::Entity::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|c| c.name),
            FavoriteKind::Planet => planet::Entity::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|p| p.name),
            FavoriteKind::Vehicle => vehicle::Entity::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|v| v.name),
        };
        Ok(name)
    }

    /// Id of the join row for (`user_id`, `target_id`), if any.
    async fn find_link(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        let id = match kind {
            FavoriteKind::Character => favorite_character::Entity::find()
                .filter(favorite_character::Column::UserId.eq(user_id))
                .filter(favorite_character::Column::CharacterId.eq(target_id))
                .one(self.db)
                .await?
                .map(|row| row.id),
            FavoriteKind::Planet => favorite_planet::Entity::find()
                .filter(favorite_planet::Column::UserId.eq(user_id))
                .filter(favorite_planet::Column::PlanetId.eq(target_id))
                .one(self.db)
                .await?
                .map(|row| row.id),
            FavoriteKind::Vehicle => favorite_vehicle::Entity::find()
                .filter(favorite_vehicle::Column::UserId.eq(user_id))
                .filter(favorite_vehicle::Column::VehicleId.eq(target_id))
                .one(self.db)
                .await?
                .map(|row| row.id),
        };
        Ok(id)
    }

    async fn insert_link(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Character => {
                favorite_character::Entity::insert(favorite_character::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    character_id: ActiveValue::Set(target_id),
                    ..Default::default()
                })
                .exec(self.db)
                .await?;
            }
            FavoriteKind::Planet => {
                favorite_planet::Entity::insert(favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planet_id: ActiveValue::Set(target_id),
                    ..Default::default()
                })
                .exec(self.db)
                .await?;
            }
            FavoriteKind::Vehicle => {
                favorite_vehicle::Entity::insert(favorite_vehicle::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    vehicle_id: ActiveValue::Set(target_id),
                    ..Default::default()
                })
                .exec(self.db)
                .await?;
            }
        }
        Ok(())
    }

    async fn delete_link(&self, kind: FavoriteKind, link_id: i32) -> Result<(), DbErr> {
        match kind {
            FavoriteKind::Character => {
                favorite_character::Entity::delete_by_id(link_id)
                    .exec(self.db)
                    .await?;
            }
            FavoriteKind::Planet => {
                favorite_planet::Entity::delete_by_id(link_id)
                    .exec(self.db)
                    .await?;
            }
            FavoriteKind::Vehicle => {
                favorite_vehicle::Entity::delete_by_id(link_id)
                    .exec(self.db)
                    .await?;
            }
        }
        Ok(())
    }
}
