//! Input checks applied before any account data leaves the client.

use crate::{CoreError, CoreResult};

pub const MAX_USERNAME_LENGTH: usize = 64;
pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_EMAIL_LENGTH: usize = 254;

#[track_caller]
pub fn validate_username(username: &str) -> CoreResult<()> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("username", "must not be empty"));
    }
    if trimmed.len() != username.len() {
        return Err(CoreError::validation(
            "username",
            "must not start or end with whitespace",
        ));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::validation(
            "username",
            format!("must be at most {} characters", MAX_USERNAME_LENGTH),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation("password", "must not be empty"));
    }
    Ok(())
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreResult<()> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation(
            "email",
            format!("must be at most {} bytes", MAX_EMAIL_LENGTH),
        ));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::validation("email", "must look like name@domain")),
    }
}
