use crate::entities::user;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account creation body. Every field is optional at the wire level so that
/// missing fields surface as a JSON `400` from the account service instead of
/// a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "luke@tatooine.net")]
    pub email: Option<String>,
    #[schema(example = "usetheforce")]
    pub password: Option<String>,
    #[schema(example = "luke")]
    pub username: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub username: Option<String>,
    pub is_active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDetailResponse {
    pub msg: String,
    pub data: UserResponse,
}
