//! Jeen storefront library.
//!
//! Client-side ordering logic for the Jeen site: the meal configurator, the
//! cart and its inline checkout, and frontend-only accounts, all persisted in
//! a string key-value store. Rendering is a separate projection in
//! [`views`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod customization;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use state::Storefront;
