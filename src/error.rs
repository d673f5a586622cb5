//! Application error type and its HTTP mapping.
//!
//! Every handler returns `actix_web::Result<HttpResponse>`; services return
//! `Result<_, AppError>` and the `?` operator converts through
//! [`ResponseError`]. Error bodies are always `{"error": "..."}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    /// A user, reference entity or favorite does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request would duplicate an existing row.
    ///
    /// Reported as 400 Bad Request, which is what clients of the favorites
    /// endpoints expect for a repeated favorite.
    #[error("{0}")]
    Conflict(String),

    /// A required field or header is missing or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// Database operation error from SeaORM.
    ///
    /// Logged server-side; the client only sees a generic message.
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl AppError {
    /// Maps a unique-constraint violation to `Conflict` with the given message
    /// and passes every other database error through unchanged.
    pub fn from_insert(err: DbErr, conflict_message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.into())
            }
            _ => AppError::Database(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Database(e) => {
                log::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}
