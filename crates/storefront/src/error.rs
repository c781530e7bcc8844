//! Unified error handling.
//!
//! Provides a unified `AppError` for the entry points that drive several
//! services in one go (the `jeen` binary). Each error knows whether it is the
//! user's to fix or an environment failure, and what message to show.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::cart::CartError;
use crate::services::checkout::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),

    /// Authentication or profile operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout transition was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// The operation needs a logged-in user.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the caller can fix this by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Config(_) | Self::Storage(_) | Self::Render(_) => false,
            Self::Auth(err) => !matches!(err, AuthError::Repository(_)),
            Self::Cart(err) => matches!(err, CartError::InvalidItem(_)),
            Self::Checkout(err) => !matches!(err, CheckoutError::Repository(_)),
            Self::Unauthorized(_) | Self::BadRequest(_) => true,
        }
    }

    /// Process exit status: 1 for user errors, 2 for environment failures.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_user_error() { 1 } else { 2 }
    }

    /// Message shown to the user.
    ///
    /// Storage details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) => "Something went wrong saving your data.".to_string(),
            Self::Auth(err) => err.message(),
            Self::Cart(CartError::InvalidItem(err)) => err.to_string(),
            Self::Checkout(err @ CheckoutError::MissingFields(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.as_str()).collect();
                format!("{err} (missing: {})", names.join(", "))
            }
            Self::Checkout(err) => err.to_string(),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
