//! Cart page: show the cart and edit its lines.
//!
//! Lines are numbered from 1, as shown by `jeen cart show`.

use clap::Subcommand;

use jeen_storefront::AppError;
use jeen_storefront::models::CartAction;
use jeen_storefront::views::{CartItemsTemplate, CartSummaryTemplate, CartView};

use super::{Site, cart_text, line_index, render, to_json};
use crate::Format;

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show line items, summary and total
    Show,
    /// Add one to a line's quantity
    Inc { line: usize },
    /// Take one from a line's quantity (never below 1)
    Dec { line: usize },
    /// Set a line's quantity (at least 1)
    Set { line: usize, quantity: u32 },
    /// Remove a line
    Remove { line: usize },
    /// Empty the cart
    Clear,
}

/// Run a cart command and print the resulting cart.
pub fn run(site: &Site, command: CartCommand, format: Format) -> Result<String, AppError> {
    let mut cart = site.cart()?;
    let len = cart.cart().len();

    let action = match command {
        CartCommand::Show => None,
        CartCommand::Inc { line } => Some(CartAction::Increment(line_index(line, len)?)),
        CartCommand::Dec { line } => Some(CartAction::Decrement(line_index(line, len)?)),
        CartCommand::Set { line, quantity } => {
            if quantity < 1 {
                return Err(AppError::BadRequest("Quantity must be at least 1.".to_string()));
            }
            Some(CartAction::SetQuantity {
                index: line_index(line, len)?,
                quantity,
            })
        }
        CartCommand::Remove { line } => Some(CartAction::Remove(line_index(line, len)?)),
        CartCommand::Clear => Some(CartAction::Clear),
    };

    if let Some(action) = action {
        cart.dispatch(action)?;
    }

    if format == Format::Json {
        return to_json(cart.cart());
    }

    let view = CartView::new(cart.cart(), site.config().currency);
    match format {
        Format::Html => Ok(format!(
            "{}\n{}",
            render(&CartItemsTemplate { cart: &view })?,
            render(&CartSummaryTemplate { cart: &view })?
        )),
        _ => Ok(cart_text(&view)),
    }
}
