use crate::db::DbPool;
use crate::entities::character;
use crate::error::AppError;
use crate::models::{CharacterDetailResponse, PeopleResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All characters ordered by id", body = PeopleResponse)
    ),
    tag = "people"
)]
pub async fn get_people(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let people = character::Entity::find()
        .order_by_asc(character::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(PeopleResponse {
        people: people.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterDetailResponse),
        (status = 404, description = "Character not found", body = ErrorResponse)
    ),
    tag = "people"
)]
pub async fn get_person(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let people_id = path.into_inner();

    let person = character::Entity::find_by_id(people_id)
        .one(pool.get_ref())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

    Ok(HttpResponse::Ok().json(CharacterDetailResponse {
        msg: "the character is getting by id".to_string(),
        data: person.into(),
    }))
}
