//! Menu page: add a listed product to the cart.

use clap::Subcommand;
use rust_decimal::Decimal;

use jeen_storefront::AppError;
use jeen_storefront::models::MenuItem;

use super::{Site, to_json};
use crate::Format;

#[derive(Subcommand)]
pub enum MenuAction {
    /// Add a menu item; adding the same product again raises its quantity
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 12.50
        #[arg(short, long)]
        price: Decimal,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

/// Run a menu action.
pub fn run(site: &Site, action: MenuAction, format: Format) -> Result<String, AppError> {
    match action {
        MenuAction::Add {
            name,
            price,
            image,
            description,
        } => {
            let mut cart = site.cart()?;
            let item = cart.add_from_menu(MenuItem {
                name,
                price,
                image,
                description,
            })?;

            if format == Format::Json {
                return to_json(&item);
            }

            let quantity = cart
                .cart()
                .items()
                .iter()
                .find(|line| line.id == item.id)
                .map_or(1, |line| line.quantity);
            Ok(format!(
                "Added {} ({}) - {} in cart, {} items total.",
                item.name,
                item.unit_price(site.config().currency).display(),
                quantity,
                cart.cart().item_count()
            ))
        }
    }
}
