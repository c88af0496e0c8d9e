use crate::{AuthError, AuthResult, NewAccount, hash_password, verify_password};

use dw_client::{ClientError, ClientResult, Gateway, Method, Prefer, Query};
use dw_core::{NewUser, User};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

const USERS: &str = "users";
const USER_COLUMNS: &str = "id,username,email,password,full_name,created_at,last_login_at,is_active";

/// Sign-in and sign-up over the `users` table.
///
/// Sign-in reads the row by username and verifies the stored Argon2id hash
/// locally. Nothing is written unless the password matches.
#[derive(Clone)]
pub struct Authenticator {
    gateway: Gateway,
}

impl Authenticator {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Verify credentials and stamp `last_login_at`.
    ///
    /// Unknown usernames and wrong passwords both give
    /// [`AuthError::InvalidCredentials`]. A failed last-login update is logged
    /// and does not fail the sign-in.
    pub async fn sign_in(&self, username: &str, password: &str) -> AuthResult<User> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::invalid_credentials());
        }

        let query = Query::table(USERS)
            .eq("username", username)
            .select(USER_COLUMNS)
            .limit(1);

        let Some(mut user) = self
            .gateway
            .get::<Vec<User>>(&query)
            .await?
            .into_iter()
            .next()
        else {
            debug!("Sign-in for unknown user '{}'", username);
            return Err(AuthError::invalid_credentials());
        };

        let matches = verify_password(password, &user.password_hash).unwrap_or_else(|e| {
            warn!("Unusable password hash for user '{}': {}", username, e);
            false
        });
        if !matches {
            debug!("Password mismatch for user '{}'", username);
            return Err(AuthError::invalid_credentials());
        }

        if !user.is_active {
            return Err(AuthError::account_disabled());
        }

        let now = Utc::now();
        match self.touch_last_login(user.id, now).await {
            Ok(()) => user.last_login_at = Some(now),
            Err(e) => warn!("Error updating last login for '{}': {}", username, e),
        }

        debug!("User '{}' signed in", username);
        Ok(user)
    }

    /// Register a new active account and return its id.
    pub async fn sign_up(&self, account: &NewAccount) -> AuthResult<Uuid> {
        account.validate()?;

        let password_hash = hash_password(&account.password)?;
        let user = NewUser::new(
            account.username.clone(),
            account.email.clone(),
            password_hash,
            account.full_name.clone(),
        );

        self.gateway
            .execute_discarding(
                Method::POST,
                &Query::table(USERS),
                Some(&user),
                Some(Prefer::ReturnMinimal),
            )
            .await
            .map_err(Self::registration_error)?;

        debug!("Registered user '{}'", account.username);
        Ok(user.id)
    }

    async fn touch_last_login(&self, user_id: Uuid, at: DateTime<Utc>) -> ClientResult<()> {
        #[derive(Serialize)]
        struct LastLoginPatch {
            last_login_at: DateTime<Utc>,
        }

        let query = Query::table(USERS).eq("id", user_id);
        let body = LastLoginPatch { last_login_at: at };

        self.gateway
            .execute_discarding(
                Method::PATCH,
                &query,
                Some(&body),
                Some(Prefer::ReturnMinimal),
            )
            .await
    }

    #[track_caller]
    fn registration_error(error: ClientError) -> AuthError {
        warn!("Error registering user: {}", error);

        if error.is_duplicate() {
            return AuthError::already_exists();
        }

        match error.body().map(str::to_owned) {
            Some(body) => AuthError::registration_failed(body),
            None => AuthError::from(error),
        }
    }
}
