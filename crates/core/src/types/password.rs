//! Account password type.
//!
//! Accounts live in client-side storage and are compared in plaintext, so this
//! wrapper exists to keep passwords out of `Debug` output and logs rather than
//! to protect them at rest.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A plaintext account password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Create a new password from the raw input.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Whether `attempt` equals the stored password exactly.
    #[must_use]
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }

    /// Whether no password has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expose the raw password.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl From<&str> for Password {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Password {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
