use crate::entities::user;
use crate::error::AppError;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

/// Validated input for a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
    pub is_active: bool,
}

impl NewUser {
    /// Builds a new account from optional request fields.
    ///
    /// Email and password must be present and non-blank. A blank username is
    /// treated as absent and `is_active` defaults to `true`.
    pub fn from_fields(
        email: Option<String>,
        password: Option<String>,
        username: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, AppError> {
        let email = present(email)
            .ok_or_else(|| AppError::BadRequest("Missing required field: email".to_string()))?;
        let password = present(password)
            .ok_or_else(|| AppError::BadRequest("Missing required field: password".to_string()))?;

        Ok(NewUser {
            email,
            password,
            username: present(username),
            is_active: is_active.unwrap_or(true),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct AccountService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists a new user.
    ///
    /// Uniqueness of email and username is left to the database; a collision
    /// is reported as `Conflict`.
    pub async fn create_user(&self, new_user: NewUser) -> Result<user::Model, AppError> {
        let active = user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            username: ActiveValue::Set(new_user.username),
            password: ActiveValue::Set(new_user.password),
            is_active: ActiveValue::Set(new_user.is_active),
            ..Default::default()
        };

        let user = user::Entity::insert(active)
            .exec_with_returning(self.db)
            .await
            .map_err(|e| {
                AppError::from_insert(e, "User with this email or username already exists")
            })?;

        log::info!("Created user {}", user.id);

        Ok(user)
    }
}
