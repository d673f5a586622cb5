use crate::db::DbPool;
use crate::entities::user;
use crate::error::AppError;
use crate::models::{CreateUserRequest, UserDetailResponse, UserFavoritesResponse, UsersResponse};
use crate::services::{AccountService, FavoriteService, NewUser};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder, TransactionTrait};

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users ordered by id", body = UsersResponse)
    ),
    tag = "user"
)]
pub async fn get_users(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/user/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserDetailResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "user"
)]
pub async fn get_user(path: web::Path<i32>, pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let user = user::Entity::find_by_id(user_id)
        .one(pool.get_ref())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserDetailResponse {
        msg: "the user is getting by id".to_string(),
        data: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = UserFavoritesResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "user"
)]
pub async fn get_user_favorites(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let favorites = FavoriteService::new(pool.get_ref())
        .list_favorites(user_id)
        .await?;

    Ok(HttpResponse::Ok().json(UserFavoritesResponse::from(favorites)))
}

#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserDetailResponse),
        (status = 400, description = "Missing required fields or user already exists", body = ErrorResponse)
    ),
    tag = "user"
)]
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let new_user = NewUser::from_fields(req.email, req.password, req.username, req.is_active)?;

    let txn = pool.begin().await.map_err(AppError::from)?;
    let user = AccountService::new(&txn).create_user(new_user).await?;
    txn.commit().await.map_err(AppError::from)?;

    Ok(HttpResponse::Created().json(UserDetailResponse {
        msg: "The user has been successfully created".to_string(),
        data: user.into(),
    }))
}
