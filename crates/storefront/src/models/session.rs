//! Session pointer.

use serde::{Deserialize, Serialize};

use jeen_core::Email;

use super::account::Account;

/// Snapshot of the logged-in user.
///
/// Denormalized from the [`Account`] at login; editing the profile refreshes
/// it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Display name.
    pub full_name: String,
    /// Account email, as stored on the account.
    pub email: Email,
}

impl From<&Account> for CurrentUser {
    fn from(account: &Account) -> Self {
        Self {
            full_name: account.full_name.clone(),
            email: account.email.clone(),
        }
    }
}
