//! Core types for Jeen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod password;
pub mod payment;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use password::Password;
pub use payment::PaymentMethod;
pub use price::{CurrencyCode, Price};
