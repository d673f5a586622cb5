use crate::db::DbPool;
use crate::entities::planet;
use crate::error::AppError;
use crate::models::{PlanetDetailResponse, PlanetsResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets ordered by id", body = PlanetsResponse)
    ),
    tag = "planets"
)]
pub async fn get_planets(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let planets = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(PlanetsResponse {
        planets: planets.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet found", body = PlanetDetailResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = "planets"
)]
pub async fn get_planet(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let planet_id = path.into_inner();

    let planet = planet::Entity::find_by_id(planet_id)
        .one(pool.get_ref())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PlanetDetailResponse {
        msg: "the planet is getting by id".to_string(),
        data: planet.into(),
    }))
}
