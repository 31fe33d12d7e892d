//! User domain models and parameters.
//!
//! Staff accounts authenticate with username and password. The authenticated view of a
//! user omits credential material and is what the token store hands back to handlers.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::{LoginResponseDto, UserDto, UserRole};

/// Stored staff account including credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<UserRole>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role of user {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            role,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        })
    }

    /// Drops credential material, keeping only what request handlers need.
    pub fn into_authenticated(self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            username: self.username,
            name: self.name,
            role: self.role,
        }
    }
}

/// User identity attached to a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            name: self.name,
            role: self.role,
        }
    }
}

/// Successful login: the user and the freshly issued token.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub user: AuthenticatedUser,
    pub token: String,
}

impl LoginSession {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            id: self.user.id,
            username: self.user.username,
            name: self.user.name,
            role: self.user.role,
            token: self.token,
        }
    }
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub password_hash: String,
}
