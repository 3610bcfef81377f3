//! Argon2 password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::server::error::{auth::AuthError, AppError};

/// Hashes a plain-text password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2 hash
/// - `Err(AppError::AuthErr(AuthError::PasswordHash))` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a plain-text password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches, which is how
/// accounts without a usable password are represented.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
