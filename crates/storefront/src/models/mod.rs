//! Domain models for the ordering site.
//!
//! These are the records persisted in the key-value store, plus the pure
//! cart reducer that operates on them.

pub mod account;
pub mod cart;
pub mod line_item;
pub mod session;

pub use account::{Account, Preferences, Profile};
pub use cart::{Cart, CartAction};
pub use line_item::{LineItem, LineItemError, MenuItem, Nutrition};
pub use session::CurrentUser;
