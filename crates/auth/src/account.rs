use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stagepass_core::UserId;

/// What an account is allowed to do: attend events, or also organize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Organizer,
}

/// A registered account, as handed back to callers (no password field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Authentication failures, surfaced synchronously to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email already in use")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone)]
struct StoredAccount {
    account: Account,
    password: String,
}

/// In-memory account registry: register, login, lookup.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    inner: RwLock<Vec<StoredAccount>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account. Fails with [`AuthError::DuplicateEmail`] when
    /// the email is already taken; the uniqueness check and the insert happen
    /// under one write-lock acquisition.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Account, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::Validation("name cannot be empty".to_string()));
        }
        if email.trim().is_empty() {
            return Err(AuthError::Validation("email cannot be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("password cannot be empty".to_string()));
        }

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.iter().any(|s| s.account.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let account = Account {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        guard.push(StoredAccount {
            account: account.clone(),
            password: password.to_string(),
        });

        tracing::info!(user_id = %account.id, role = ?role, "account registered");
        Ok(account)
    }

    /// Verbatim credential check against the directory.
    pub fn login(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .iter()
            .find(|s| s.account.email == email && s.password == password)
            .map(|s| s.account.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    pub fn get(&self, id: UserId) -> Option<Account> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .iter()
            .find(|s| s.account.id == id)
            .map(|s| s.account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_login_round_trips() {
        let directory = AccountDirectory::new();
        let registered = directory
            .register("John Doe", "user@example.com", "password123", Role::User)
            .unwrap();

        let logged_in = directory.login("user@example.com", "password123").unwrap();
        assert_eq!(registered, logged_in);
        assert_eq!(directory.get(registered.id), Some(registered));
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let directory = AccountDirectory::new();
        directory
            .register("John Doe", "user@example.com", "password123", Role::User)
            .unwrap();

        let err = directory
            .register("Jane Doe", "user@example.com", "hunter2", Role::Organizer)
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateEmail);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let directory = AccountDirectory::new();
        directory
            .register("John Doe", "user@example.com", "password123", Role::User)
            .unwrap();

        assert_eq!(
            directory.login("user@example.com", "nope").unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            directory.login("ghost@example.com", "password123").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn empty_fields_fail_validation() {
        let directory = AccountDirectory::new();
        assert!(matches!(
            directory.register("", "a@b.c", "pw", Role::User),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            directory.register("A", " ", "pw", Role::User),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            directory.register("A", "a@b.c", "", Role::User),
            Err(AuthError::Validation(_))
        ));
    }
}
