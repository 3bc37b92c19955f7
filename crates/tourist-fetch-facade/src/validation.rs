//! Input checks run before any request is sent.

use crate::error::FacadeError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Returns `true` if `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks registration input in the order a form reports problems.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), FacadeError> {
    if name.trim().is_empty() {
        return Err(invalid("Name is required"));
    }
    if email.trim().is_empty() {
        return Err(invalid("Email is required"));
    }
    if password.is_empty() {
        return Err(invalid("Password is required"));
    }
    if !is_valid_email(email) {
        return Err(invalid("Please enter a valid email"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid("Password must be at least 6 characters"));
    }
    Ok(())
}

/// Checks login input: both fields present.
pub fn validate_login(email: &str, password: &str) -> Result<(), FacadeError> {
    if email.trim().is_empty() {
        return Err(invalid("Email is required"));
    }
    if password.is_empty() {
        return Err(invalid("Password is required"));
    }
    Ok(())
}

fn invalid(message: &str) -> FacadeError {
    FacadeError::InvalidInput(message.to_string())
}
