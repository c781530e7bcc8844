//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication and profile operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account is registered under the email.
    #[error("Account not found. Please sign up.")]
    NotFound,

    /// The password does not match the stored one.
    #[error("Wrong password.")]
    WrongPassword,

    /// The email is already registered.
    #[error("Account already exists. Please log in.")]
    Exists,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] jeen_core::EmailError),

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for AuthError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Conflict(_) => Self::Exists,
            other => Self::Repository(other),
        }
    }
}

impl AuthError {
    /// Stable code shown to the popup.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::Exists => "EXISTS",
            Self::InvalidEmail(_) => "INVALID_EMAIL",
            Self::Repository(_) => "STORAGE",
        }
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidEmail(_) => "Please enter a valid email address.".to_owned(),
            Self::Repository(_) => "Something went wrong. Please try again.".to_owned(),
            other => other.to_string(),
        }
    }
}
