//! Header chrome state: cart badge and profile button.

use std::cell::Cell;

use askama::Template;

use crate::models::cart::Cart;
use crate::models::session::CurrentUser;
use crate::services::cart::CartObserver;

/// Icon shown on the profile button once logged in.
pub const PROFILE_ICON: &str = "/common_elements/profile_icon.png";

/// How the profile button is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileButton {
    /// Text button that opens the auth popup.
    LogIn,
    /// Icon button for the logged-in user.
    Profile { icon: &'static str },
}

/// What activating the profile button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDispatch {
    OpenLoginPopup,
    Navigate(String),
}

/// Header state derived from the cart count and the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub cart_count: u32,
    pub badge_visible: bool,
    pub profile_button: ProfileButton,
    profile_url: String,
}

impl HeaderState {
    #[must_use]
    pub fn new(cart_count: u32, user: Option<&CurrentUser>, profile_url: impl Into<String>) -> Self {
        Self {
            cart_count,
            badge_visible: cart_count > 0,
            profile_button: if user.is_some() {
                ProfileButton::Profile { icon: PROFILE_ICON }
            } else {
                ProfileButton::LogIn
            },
            profile_url: profile_url.into(),
        }
    }

    /// Action for a click on the profile button.
    #[must_use]
    pub fn dispatch_profile(&self) -> ProfileDispatch {
        match self.profile_button {
            ProfileButton::LogIn => ProfileDispatch::OpenLoginPopup,
            ProfileButton::Profile { .. } => ProfileDispatch::Navigate(self.profile_url.clone()),
        }
    }

    /// Label for text renderings.
    #[must_use]
    pub const fn profile_label(&self) -> &'static str {
        match self.profile_button {
            ProfileButton::LogIn => "Log in",
            ProfileButton::Profile { .. } => "Profile",
        }
    }
}

/// Live cart count for the header badge.
///
/// Register with [`crate::services::cart::CartService::subscribe`].
#[derive(Debug, Default)]
pub struct CartBadge {
    count: Cell<u32>,
}

impl CartBadge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.get()
    }
}

impl CartObserver for CartBadge {
    fn cart_changed(&self, cart: &Cart) {
        self.count.set(cart.item_count());
    }
}

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate<'a> {
    pub header: &'a HeaderState,
}
