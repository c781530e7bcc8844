//! Account records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use jeen_core::{Email, Password};

/// A registered account.
///
/// Keyed by email, compared case-insensitively. Nested sections default to
/// empty so partially written records still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub full_name: String,
    pub email: Email,
    #[serde(default)]
    pub password: Password,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub preferences: Preferences,
    /// Daily calorie estimate saved from the profile page. Stored as a JSON
    /// number, which may be fractional.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub bmr: Option<Decimal>,
}

/// Contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

/// Dietary preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub calorie_target: String,
}

impl Account {
    /// A new account with empty profile and preferences.
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: Email, password: Password) -> Self {
        Self {
            full_name: full_name.into(),
            email,
            password,
            profile: Profile::default(),
            preferences: Preferences::default(),
            bmr: None,
        }
    }
}
