//! Email + password auth service: credential validation, hashing, sign-up
//! and sign-in.
//!
//! DESIGN
//! ======
//! Passwords are stored as argon2id PHC strings. Hashing and verification are
//! CPU-bound, so both run on Tokio's blocking pool instead of a request task.
//! Sign-in failures never reveal whether the email exists.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionUser;

pub const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 1024;
const MAX_FULL_NAME_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least 6 characters")]
    WeakPassword,
    #[error("password must be at most 1024 characters")]
    PasswordTooLong,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Check the password length policy. Length is counted in characters.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` when the password is too short and
/// `AuthError::PasswordTooLong` when it exceeds the hashing input cap.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        Err(AuthError::WeakPassword)
    } else if len > MAX_PASSWORD_LEN {
        Err(AuthError::PasswordTooLong)
    } else {
        Ok(())
    }
}

/// Trim an optional display name; blank names are stored as `NULL`.
#[must_use]
pub fn normalize_full_name(full_name: Option<&str>) -> Option<String> {
    let trimmed = full_name?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_FULL_NAME_LEN).collect())
}

/// Hash a password into an argon2id PHC string with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC string. Malformed hashes never match.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

async fn hash_password_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::Hash(e.to_string()))?
}

async fn verify_password_blocking(password: String, stored_hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AuthError::Hash(e.to_string()))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Register a new user. Returns the created user.
///
/// # Errors
///
/// Returns a validation error for a malformed email or weak password,
/// `AuthError::EmailTaken` if the email is registered, or a database error.
pub async fn sign_up(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: Option<&str>,
) -> Result<SessionUser, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    validate_password(password)?;
    let full_name = normalize_full_name(full_name);
    let password_hash = hash_password_blocking(password.to_owned()).await?;

    let row = sqlx::query(
        r"INSERT INTO users (email, password_hash, full_name)
          VALUES ($1, $2, $3)
          RETURNING id, email, full_name, role",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(&full_name)
    .fetch_one(pool)
    .await
    .map_err(|e| if is_unique_violation(&e) { AuthError::EmailTaken } else { AuthError::Db(e) })?;

    let user = SessionUser {
        id: row.get("id"),
        email: row.get("email"),
        full_name: row.get("full_name"),
        role: row.get("role"),
    };
    tracing::info!(user_id = %user.id, "user signed up");
    Ok(user)
}

/// Authenticate an existing user by email and password.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
/// password, or a database error.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, email, full_name, role, password_hash FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash: String = row.get("password_hash");
    if !verify_password_blocking(password.to_owned(), stored_hash).await? {
        return Err(AuthError::InvalidCredentials);
    }

    let user_id: Uuid = row.get("id");
    tracing::info!(%user_id, "user signed in");
    Ok(SessionUser {
        id: user_id,
        email: row.get("email"),
        full_name: row.get("full_name"),
        role: row.get("role"),
    })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
