//! Username/password authentication.
//!
//! `AuthService` verifies credentials against the Argon2 password hashes stored with each
//! user and issues bearer tokens from the shared `TokenStore`.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, LoginSession, User},
        service::auth::token::TokenStore,
        util::password::{hash_password, verify_password},
    },
};

/// Accounts created on first start when the user table is empty.
pub const DEFAULT_USERS: [(&str, &str, UserRole, &str); 2] = [
    ("admin", "Administrator", UserRole::Admin, "admin123"),
    ("mechanic", "Mechanic", UserRole::Mechanic, "mechanic123"),
];

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenStore,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenStore) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Returns
    /// - `Ok(LoginSession)` - User and newly issued token
    /// - `Err(AppError::BadRequest)` - Username or password missing
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.username);

        let user = user.into_authenticated();
        let token = self.tokens.issue(user.clone()).await;

        Ok(LoginSession { user, token })
    }

    /// Revokes the presented token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        self.tokens.revoke(token).await;
    }

    /// Creates a user, storing an Argon2 hash of the password.
    pub async fn register(
        &self,
        username: &str,
        name: &str,
        role: UserRole,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                username: username.to_string(),
                name: name.to_string(),
                role,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Creates the default accounts when no user exists yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Default users were created
    /// - `Ok(false)` - Users already existed; nothing changed
    pub async fn ensure_default_users(&self) -> Result<bool, AppError> {
        if UserRepository::new(self.db).count().await? > 0 {
            return Ok(false);
        }

        for (username, name, role, password) in DEFAULT_USERS {
            self.register(username, name, role, password).await?;
            tracing::info!("Created default {} account '{}'", role, username);
        }

        Ok(true)
    }
}
