//! In-memory bearer token store.
//!
//! This module provides the `TokenStore` that maps opaque bearer tokens issued at login to
//! the authenticated user. Tokens live in process memory with a fixed TTL, so restarting
//! the server signs every user out. Expired tokens are evicted when they are looked up and
//! whenever a new token is issued.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::model::user::AuthenticatedUser;

const TOKEN_CHARSET: &[u8] = b"0123456789abcdef";
const TOKEN_LENGTH: usize = 48;

/// Issued token with the user it authenticates and its expiry.
#[derive(Clone)]
struct IssuedToken {
    user: AuthenticatedUser,
    expires_at: Instant,
}

impl IssuedToken {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Shared table of active bearer tokens.
///
/// Cloning is cheap; clones share the same table.
#[derive(Clone)]
pub struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, IssuedToken>>>,
    ttl: Duration,
}

impl TokenStore {
    /// Creates an empty store whose tokens expire `ttl` after being issued.
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Issues a new random token for the user.
    ///
    /// # Returns
    /// - `String` - 48 character lowercase hex token
    pub async fn issue(&self, user: AuthenticatedUser) -> String {
        let token = Self::generate_token();
        let issued = IssuedToken {
            user,
            expires_at: Instant::now() + self.ttl,
        };

        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, entry| !entry.is_expired());
        tokens.insert(token.clone(), issued);

        token
    }

    /// Looks up the user for a token.
    ///
    /// # Returns
    /// - `Some(AuthenticatedUser)` - Token is known and not expired
    /// - `None` - Token is unknown, revoked or expired (expired entries are removed)
    pub async fn resolve(&self, token: &str) -> Option<AuthenticatedUser> {
        {
            let tokens = self.tokens.read().await;
            match tokens.get(token) {
                Some(entry) if !entry.is_expired() => return Some(entry.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        self.tokens.write().await.remove(token);
        None
    }

    /// Revokes a token.
    ///
    /// # Returns
    /// - `true` - Token existed and was removed
    /// - `false` - Token was not known
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    fn generate_token() -> String {
        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..TOKEN_CHARSET.len());
                TOKEN_CHARSET[idx] as char
            })
            .collect()
    }
}
