//! Account sign-in and sign-up against the remote `users` table.
//!
//! Passwords are stored as Argon2id PHC strings and verified locally.

pub mod authenticator;
pub mod error;
pub mod new_account;
pub mod password;

#[cfg(test)]
mod tests;

pub use authenticator::Authenticator;
pub use error::{AuthError, Result as AuthResult};
pub use new_account::NewAccount;
pub use password::{hash_password, verify_password};
