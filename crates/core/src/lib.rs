//! Jeen Core - Shared types library.
//!
//! This crate provides common types used across all Jeen components:
//! - `storefront` - Cart, meal configurator, checkout and account logic
//! - `cli` - The `jeen` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for line item ids, prices, emails, passwords
//!   and payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
