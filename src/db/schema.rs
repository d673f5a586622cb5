use crate::entities::{
    character, favorite_character, favorite_planet, favorite_vehicle, planet, user, vehicle,
};
use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

/// Creates every table that does not exist yet, then the unique indexes that
/// stop a user from favoriting the same target twice.
///
/// Tables are created in dependency order so foreign keys resolve.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, character::Entity).await?;
    create_table(db, planet::Entity).await?;
    create_table(db, vehicle::Entity).await?;
    create_table(db, favorite_character::Entity).await?;
    create_table(db, favorite_planet::Entity).await?;
    create_table(db, favorite_vehicle::Entity).await?;

    let backend = db.get_database_backend();
    for index in favorite_indexes() {
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}

fn favorite_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_favorite_characters_user_character")
            .table(favorite_character::Entity)
            .col(favorite_character::Column::UserId)
            .col(favorite_character::Column::CharacterId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_favorite_planets_user_planet")
            .table(favorite_planet::Entity)
            .col(favorite_planet::Column::UserId)
            .col(favorite_planet::Column::PlanetId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_favorite_vehicles_user_vehicle")
            .table(favorite_vehicle::Entity)
            .col(favorite_vehicle::Column::UserId)
            .col(favorite_vehicle::Column::VehicleId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}
