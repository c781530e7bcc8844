//! Authentication service.
//!
//! Frontend-only accounts: passwords are stored and compared as entered, and
//! the session is a denormalized [`CurrentUser`] snapshot. Failures are
//! returned as [`AuthError`] values and convert into the popup's tagged
//! [`AuthResponse`].

mod error;

pub use error::AuthError;

use serde::Serialize;
use tracing::instrument;

use jeen_core::{Email, Password};

use crate::db::KeyValueStore;
use crate::db::accounts::AccountRepository;
use crate::models::account::Account;
use crate::models::session::CurrentUser;

/// Sign-up form input.
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Tagged result shown by the auth popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// A successful response.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            ok: true,
            code: None,
            message: None,
        }
    }
}

impl From<&AuthError> for AuthResponse {
    fn from(e: &AuthError) -> Self {
        Self {
            ok: false,
            code: Some(e.code()),
            message: Some(e.message()),
        }
    }
}

impl<T> From<Result<T, AuthError>> for AuthResponse {
    fn from(result: Result<T, AuthError>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::from(&e),
        }
    }
}

/// Authentication service.
///
/// Handles sign-up, login and the session pointer.
pub struct AuthService<'a, S: KeyValueStore + ?Sized> {
    accounts: AccountRepository<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            accounts: AccountRepository::new(store),
        }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotFound` if no account matches the email.
    /// Returns `AuthError::WrongPassword` if the password differs.
    pub fn log_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let account = self.accounts.find(email)?.ok_or(AuthError::NotFound)?;

        if !account.password.matches(password) {
            tracing::debug!(email = %account.email, "Login rejected: wrong password");
            return Err(AuthError::WrongPassword);
        }

        let user = CurrentUser::from(&account);
        self.accounts.set_current_user(&user)?;
        tracing::debug!(email = %user.email, "Logged in");
        Ok(user)
    }

    /// Register a new account and log it in.
    ///
    /// Name and email are trimmed; the password is stored as given.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::Exists` if the email is already registered.
    #[instrument(skip(self, form), fields(email = %form.email.trim()))]
    pub fn sign_up(&self, form: SignUp) -> Result<CurrentUser, AuthError> {
        if self.accounts.find(&form.email)?.is_some() {
            return Err(AuthError::Exists);
        }

        let email = Email::parse(&form.email)?;
        let account = Account::new(form.full_name.trim(), email, Password::new(form.password));
        let user = CurrentUser::from(&account);

        self.accounts.upsert(account)?;
        self.accounts.set_current_user(&user)?;

        tracing::info!("Account created");
        Ok(user)
    }

    /// Clear the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be written.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.accounts.clear_current_user()?;
        Ok(())
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be read.
    pub fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        Ok(self.accounts.current_user()?)
    }
}
