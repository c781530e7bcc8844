//! Site header: cart badge and profile button.

use serde_json::json;

use jeen_storefront::AppError;
use jeen_storefront::views::{CartCountTemplate, ProfileButton, ProfileDispatch};

use super::{Site, render, to_json};
use crate::Format;

/// Print the header state for the current cart and session.
pub fn run(site: &Site, format: Format) -> Result<String, AppError> {
    let header = site.header()?;

    match format {
        Format::Html => render(&CartCountTemplate { header: &header }),
        Format::Json => {
            let icon = match header.profile_button {
                ProfileButton::LogIn => None,
                ProfileButton::Profile { icon } => Some(icon),
            };
            let on_click = match header.dispatch_profile() {
                ProfileDispatch::OpenLoginPopup => json!({ "openLoginPopup": true }),
                ProfileDispatch::Navigate(url) => json!({ "navigate": url }),
            };
            to_json(&json!({
                "cartCount": header.cart_count,
                "badgeVisible": header.badge_visible,
                "profileButton": header.profile_label(),
                "profileIcon": icon,
                "onClick": on_click,
            }))
        }
        Format::Text => {
            let badge = if header.badge_visible {
                format!("Cart ({})", header.cart_count)
            } else {
                "Cart".to_string()
            };
            let target = match header.dispatch_profile() {
                ProfileDispatch::OpenLoginPopup => "opens the login popup".to_string(),
                ProfileDispatch::Navigate(url) => format!("goes to {url}"),
            };
            Ok(format!("{badge} | {} ({target})", header.profile_label()))
        }
    }
}
