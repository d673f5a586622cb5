use crate::db::DbPool;
use crate::entities::vehicle;
use crate::error::AppError;
use crate::models::{VehicleDetailResponse, VehiclesResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/vehicles",
    responses(
        (status = 200, description = "All vehicles ordered by id", body = VehiclesResponse)
    ),
    tag = "vehicles"
)]
pub async fn get_vehicles(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let vehicles = vehicle::Entity::find()
        .order_by_asc(vehicle::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(VehiclesResponse {
        vehicles: vehicles.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleDetailResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let vehicle_id = path.into_inner();

    let vehicle = vehicle::Entity::find_by_id(vehicle_id)
        .one(pool.get_ref())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    Ok(HttpResponse::Ok().json(VehicleDetailResponse {
        msg: "the vehicle is getting by id".to_string(),
        data: vehicle.into(),
    }))
}
