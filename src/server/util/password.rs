//! Argon2 password hashing for staff accounts.
//!
//! Hashes are stored as PHC strings, which carry the algorithm parameters and the salt, so
//! no separate salt column is needed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash (`$argon2id$...`)
/// - `Err(password_hash::Error)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A stored value that does not parse as a PHC string never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
