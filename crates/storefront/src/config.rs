//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `JEEN_DATA_DIR` - Directory holding the file-backed store (default: .jeen)
//! - `JEEN_ASSETS_DIR` - Configurator preview image directory (default: /customization/assets/)
//! - `JEEN_HOME_URL` - Page the confirmation step links back to (default: /index.html)
//! - `JEEN_PROFILE_URL` - Page the profile button opens when logged in (default: /profile/profile.html)
//! - `JEEN_CURRENCY` - Display currency, one of USD EUR GBP CAD AUD (default: USD)

use std::path::PathBuf;

use thiserror::Error;

use jeen_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for the file-backed store
    pub data_dir: PathBuf,
    /// Prefix for configurator preview images
    pub assets_dir: String,
    /// Home page URL
    pub home_url: String,
    /// Profile page URL
    pub profile_url: String,
    /// Currency used when rendering prices
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".jeen"),
            assets_dir: "/customization/assets/".to_string(),
            home_url: "/index.html".to_string(),
            profile_url: "/profile/profile.html".to_string(),
            currency: CurrencyCode::USD,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = get_optional_env(&lookup, "JEEN_DATA_DIR")
            .map_or(defaults.data_dir, PathBuf::from);
        let assets_dir = get_env_or_default(&lookup, "JEEN_ASSETS_DIR", &defaults.assets_dir);
        let home_url = get_url(&lookup, "JEEN_HOME_URL", &defaults.home_url)?;
        let profile_url = get_url(&lookup, "JEEN_PROFILE_URL", &defaults.profile_url)?;
        let currency = get_env_or_default(&lookup, "JEEN_CURRENCY", defaults.currency.code())
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("JEEN_CURRENCY".to_string(), e.to_string()))?;

        Ok(Self {
            data_dir,
            assets_dir,
            home_url,
            profile_url,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional_env<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: &str) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Get a site-relative or absolute URL.
fn get_url<F: Fn(&str) -> Option<String>>(
    lookup: &F,
    key: &str,
    default: &str,
) -> Result<String, ConfigError> {
    let value = get_env_or_default(lookup, key, default);
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a path starting with '/' or an http(s) URL (got {value:?})"),
        ))
    }
}
