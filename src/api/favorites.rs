//! Favorite mutations for the acting user named in the `user_id` header.
//!
//! Characters are favorited under `/favorite/people/{id}` but removed under
//! `/favorite/person/{id}`; both paths are part of the published API.

use crate::db::DbPool;
use crate::error::AppError;
use crate::extractors::ActingUser;
use crate::models::{MessageResponse, MsgResponse};
use crate::services::{FavoriteKind, FavoriteService};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::TransactionTrait;

/// Runs one favorite mutation inside its own transaction. An error drops the
/// transaction uncommitted, which rolls it back.
async fn add_in_transaction(
    pool: &DbPool,
    kind: FavoriteKind,
    user_id: i32,
    target_id: i32,
) -> Result<String, AppError> {
    let txn = pool.begin().await?;
    let message = FavoriteService::new(&txn)
        .add_favorite(kind, user_id, target_id)
        .await?;
    txn.commit().await?;
    Ok(message)
}

async fn remove_in_transaction(
    pool: &DbPool,
    kind: FavoriteKind,
    user_id: i32,
    target_id: i32,
) -> Result<String, AppError> {
    let txn = pool.begin().await?;
    let message = FavoriteService::new(&txn)
        .remove_favorite(kind, user_id, target_id)
        .await?;
    txn.commit().await?;
    Ok(message)
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Planet added to favorites", body = MessageResponse),
        (status = 400, description = "Planet already a favorite or bad user_id header", body = ErrorResponse),
        (status = 404, description = "User or planet not found", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn add_favorite_planet(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let message = add_in_transaction(
        pool.get_ref(),
        FavoriteKind::Planet,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Character id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Character added to favorites", body = MsgResponse),
        (status = 400, description = "Character already a favorite or bad user_id header", body = ErrorResponse),
        (status = 404, description = "User or character not found", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn add_favorite_person(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let msg = add_in_transaction(
        pool.get_ref(),
        FavoriteKind::Character,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MsgResponse { msg }))
}

#[utoipa::path(
    post,
    path = "/favorite/vehicle/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Vehicle added to favorites", body = MsgResponse),
        (status = 400, description = "Vehicle already a favorite or bad user_id header", body = ErrorResponse),
        (status = 404, description = "User or vehicle not found", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn add_favorite_vehicle(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let msg = add_in_transaction(
        pool.get_ref(),
        FavoriteKind::Vehicle,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MsgResponse { msg }))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MsgResponse),
        (status = 400, description = "Bad user_id header", body = ErrorResponse),
        (status = 404, description = "User not found or planet not a favorite", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn delete_favorite_planet(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let msg = remove_in_transaction(
        pool.get_ref(),
        FavoriteKind::Planet,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MsgResponse { msg }))
}

#[utoipa::path(
    delete,
    path = "/favorite/person/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Character id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MsgResponse),
        (status = 400, description = "Bad user_id header", body = ErrorResponse),
        (status = 404, description = "User not found or character not a favorite", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn delete_favorite_person(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let msg = remove_in_transaction(
        pool.get_ref(),
        FavoriteKind::Character,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MsgResponse { msg }))
}

#[utoipa::path(
    delete,
    path = "/favorite/vehicle/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id"),
        ("user_id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Vehicle removed from favorites", body = MsgResponse),
        (status = 400, description = "Bad user_id header", body = ErrorResponse),
        (status = 404, description = "User not found or vehicle not a favorite", body = ErrorResponse)
    ),
    tag = "favorite"
)]
pub async fn delete_favorite_vehicle(
    path: web::Path<i32>,
    user: ActingUser,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let msg = remove_in_transaction(
        pool.get_ref(),
        FavoriteKind::Vehicle,
        user.user_id,
        path.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(MsgResponse { msg }))
}
