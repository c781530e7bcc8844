//! View projections.
//!
//! Each view is a plain struct computed from domain state, holding only
//! display strings. Templates under `templates/` render them with askama;
//! the CLI prints the same structs as text.

pub mod cart;
pub mod checkout;
pub mod customization;
pub mod header;

pub use cart::{CartItemView, CartItemsTemplate, CartSummaryTemplate, CartView, SummaryRow};
pub use checkout::{ConfirmationTemplate, ConfirmationView};
pub use customization::{ChipView, ConfiguratorView, PreviewTemplate};
pub use header::{CartBadge, CartCountTemplate, HeaderState, ProfileButton, ProfileDispatch};
