use crate::AuthResult;

use dw_core::credentials::{validate_email, validate_password, validate_username};

/// Registration form for [`crate::Authenticator::sign_up`].
#[derive(Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl NewAccount {
    pub fn new(username: String, password: String, email: String) -> Self {
        Self {
            username,
            password,
            email,
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: String) -> Self {
        self.full_name = Some(full_name).filter(|name| !name.trim().is_empty());
        self
    }

    #[track_caller]
    pub fn validate(&self) -> AuthResult<()> {
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish()
    }
}
