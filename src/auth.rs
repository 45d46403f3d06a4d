//! Demo-mode authentication.
//!
//! Accounts live only in memory. The signed-in user record is mirrored to
//! the key-value store so a session can be restored on the next launch.

use crate::storage::{KvStore, StorageError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const USER_KEY: &str = "@emosante/user";
pub const MIN_PASSWORD_LEN: usize = 6;
const DEMO_USER_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }

    fn into_result(self) -> Result<(), AuthError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Invalid(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<&str> = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
        f.write_str(&msgs.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn check_email(email: &str) -> Option<String> {
    let email = email.trim();
    (email.is_empty() || !email.contains('@')).then(|| "Valid email is required".to_string())
}

fn check_password(password: &str) -> Option<String> {
    (password.chars().count() < MIN_PASSWORD_LEN)
        .then(|| format!("Password must be at least {MIN_PASSWORD_LEN} characters"))
}

impl SignUpForm {
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: self
                .name
                .trim()
                .is_empty()
                .then(|| "Name cannot be empty".to_string()),
            email: check_email(&self.email),
            password: check_password(&self.password),
            confirm_password: (self.confirm_password != self.password)
                .then(|| "Passwords do not match".to_string()),
        }
    }
}

impl SignInForm {
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            email: check_email(&self.email),
            password: check_password(&self.password),
            ..FieldErrors::default()
        }
    }
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

#[derive(Debug)]
pub struct AuthState {
    user: Option<User>,
    accounts: Vec<Account>,
    store: KvStore,
}

impl AuthState {
    pub fn new(store: KvStore) -> Self {
        AuthState {
            user: None,
            accounts: Vec::new(),
            store,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Loads the stored user record, if any. A malformed record is dropped.
    pub fn restore_session(&mut self) -> Option<&User> {
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str::<User>(raw) {
            Ok(user) => {
                log::info!("auth: restored session for {}", user.email);
                self.user = Some(user);
                self.user.as_ref()
            }
            Err(e) => {
                log::warn!("auth: discarding unreadable session record: {}", e);
                None
            }
        }
    }

    pub fn sign_up(&mut self, form: &SignUpForm, now: DateTime<Local>) -> Result<&User, AuthError> {
        form.validate().into_result()?;

        let email = form.email.trim();
        if self.find_account(email).is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: self.fresh_id(&now),
            name: form.name.trim().to_string(),
            email: email.to_string(),
        };
        self.persist_session(&user)?;
        log::info!("auth: signed up {}", user.email);
        self.accounts.push(Account {
            user: user.clone(),
            password: form.password.clone(),
        });
        Ok(&*self.user.insert(user))
    }

    pub fn sign_in(&mut self, form: &SignInForm, now: DateTime<Local>) -> Result<&User, AuthError> {
        form.validate().into_result()?;

        let email = form.email.trim();
        let (user, is_new) = match self.find_account(email) {
            Some(account) if account.password == form.password => (account.user.clone(), false),
            Some(_) => return Err(AuthError::InvalidCredentials),
            // Demo mode: unknown emails get a throwaway account.
            None => (
                User {
                    id: self.fresh_id(&now),
                    name: DEMO_USER_NAME.to_string(),
                    email: email.to_string(),
                },
                true,
            ),
        };
        self.persist_session(&user)?;
        if is_new {
            log::info!("auth: demo session for {}", user.email);
            self.accounts.push(Account {
                user: user.clone(),
                password: form.password.clone(),
            });
        }
        Ok(&*self.user.insert(user))
    }

    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        if let Some(user) = self.user.take() {
            log::info!("auth: signed out {}", user.email);
        }
        self.store.remove_item(USER_KEY)?;
        Ok(())
    }

    /// Writes the user record. Nothing in memory changes unless this succeeds.
    fn persist_session(&mut self, user: &User) -> Result<(), AuthError> {
        let record = serde_json::to_string(user).map_err(StorageError::from)?;
        self.store.set_item(USER_KEY, record)?;
        Ok(())
    }

    fn find_account(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
    }

    fn fresh_id(&self, now: &DateTime<Local>) -> String {
        let mut millis = now.timestamp_millis();
        while self.accounts.iter().any(|a| a.user.id == millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }
}
