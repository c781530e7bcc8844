//! Checkout: run the wizard from summary to confirmation in one go.

use clap::Args;

use jeen_core::PaymentMethod;
use jeen_storefront::AppError;
use jeen_storefront::services::AddressForm;
use jeen_storefront::views::{ConfirmationTemplate, ConfirmationView};

use super::{Site, render, to_json};
use crate::Format;

#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    country: String,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long, default_value = "")]
    postal: String,

    #[arg(long, default_value = "")]
    street: String,

    /// cash, card or wallet
    #[arg(long)]
    payment: Option<PaymentMethod>,
}

/// Place the order; the cart is cleared on success.
pub fn run(site: &Site, args: CheckoutArgs, format: Format) -> Result<String, AppError> {
    let mut cart = site.cart()?;
    let mut checkout = site.checkout();

    checkout.begin(&cart)?;
    checkout.submit_address(AddressForm {
        country: args.country,
        city: args.city,
        postal: args.postal,
        street: args.street,
    })?;
    checkout.confirm(args.payment, &mut cart)?;
    let Some(receipt) = checkout.receipt() else {
        return Err(AppError::BadRequest("No order was placed.".to_string()));
    };

    if format == Format::Json {
        return to_json(receipt);
    }

    let view = ConfirmationView::new(receipt, site.config().currency, checkout.home_url());
    match format {
        Format::Html => render(&ConfirmationTemplate { view: &view }),
        _ => {
            let rows: Vec<_> = view
                .rows
                .iter()
                .map(|row| format!("  {:<30} {}", row.label, row.line_total))
                .collect();
            Ok(format!(
                "Order {} placed.\n{}\nTotal: {}\nPayment: {}\nDeliver to: {}\nBack to home: {}",
                view.order_number,
                rows.join("\n"),
                view.total,
                view.payment,
                view.deliver_to,
                view.home_url
            ))
        }
    }
}
