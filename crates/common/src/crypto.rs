//! Cryptographic utilities shared across Askforge crates
//!
//! Password hashing and verification using Argon2id with a per-hash random
//! salt. Verification is delegated to the primitive's constant-time
//! comparison.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::Error;

/// Hash a plaintext password for storage.
///
/// The output is a PHC string (`$argon2id$...`) embedding the salt and
/// parameters, so no separate salt column is needed.
pub fn hash_password(plain: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash verifies as `false` rather than erroring; the
/// caller cannot distinguish it from a wrong password.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
