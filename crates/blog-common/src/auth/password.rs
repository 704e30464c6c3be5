//! Password hashing and verification
//!
//! Argon2id with a random salt per hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Shortest accepted password
pub const PASSWORD_MIN_LEN: usize = 8;
/// Longest accepted password
pub const PASSWORD_MAX_LEN: usize = 72;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check a new password against the strength rules:
/// 8 to 72 characters with at least one uppercase letter, one lowercase
/// letter and one digit.
///
/// # Errors
/// Returns `AppError::Validation` naming the first rule that failed
pub fn validate_password_strength(password: &str) -> AppResult<()> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long"
        )));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(AppError::validation(format!(
            "Password must be at most {PASSWORD_MAX_LEN} characters long"
        )));
    }

    let rules: [(fn(&char) -> bool, &str); 3] = [
        (char::is_ascii_uppercase, "uppercase letter"),
        (char::is_ascii_lowercase, "lowercase letter"),
        (char::is_ascii_digit, "digit"),
    ];
    for (check, what) in rules {
        if !password.chars().any(|c| check(&c)) {
            return Err(AppError::validation(format!(
                "Password must contain at least one {what}"
            )));
        }
    }

    Ok(())
}
