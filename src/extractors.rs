use crate::error::AppError;
use actix_web::{Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Header carrying the id of the user a favorites request acts for.
pub const USER_ID_HEADER: &str = "user_id";

/// The user a request acts on behalf of, taken verbatim from the `user_id`
/// header. The value is not authenticated; the favorites service still
/// checks that the user exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser {
    pub user_id: i32,
}

impl FromRequest for ActingUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            parse_user_id(req)
                .map(|user_id| ActingUser { user_id })
                .map_err(Error::from),
        )
    }
}

fn parse_user_id(req: &HttpRequest) -> Result<i32, AppError> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::BadRequest("Missing user_id header".to_string()))?;

    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid user_id header".to_string()))
}
