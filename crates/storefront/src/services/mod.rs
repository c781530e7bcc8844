//! Business logic services for the ordering site.
//!
//! # Services
//!
//! - `auth` - Sign-up, login and the session pointer
//! - `cart` - Write-through cart with observer notification
//! - `checkout` - The inline address/payment/confirmation wizard
//! - `profile` - Profile editing for the logged-in user
//!
//! Services borrow a [`crate::db::KeyValueStore`] and are cheap to build per
//! operation.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod profile;

pub use auth::{AuthError, AuthResponse, AuthService, SignUp};
pub use cart::{AddedToCart, CartError, CartObserver, CartService, FlyToCart};
pub use checkout::{AddressField, AddressForm, Checkout, CheckoutError, CheckoutStep, OrderReceipt};
pub use profile::{ProfileService, ProfileUpdate};
