//! Argon2 password hashing.
//!
//! Hashes are stored as PHC strings, so the algorithm parameters and salt travel with
//! the hash and verification needs nothing else.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use crate::server::error::internal::InternalError;

/// Hashes `password` with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash
/// - `Err(InternalError::PasswordHash)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
