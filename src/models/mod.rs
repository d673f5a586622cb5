pub mod catalog;
pub mod favorite;
pub mod user;

pub use catalog::*;
pub use favorite::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Confirmation body keyed by `msg`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MsgResponse {
    pub msg: String,
}

/// Confirmation body keyed by `message`, used when favoriting a planet.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
