//! Order confirmation projection.

use askama::Template;

use jeen_core::{CurrencyCode, Price};

use super::cart::SummaryRow;
use crate::services::checkout::OrderReceipt;

/// Confirmation step display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub order_number: String,
    pub rows: Vec<SummaryRow>,
    pub total: String,
    pub payment: &'static str,
    /// `street, city postal, country`
    pub deliver_to: String,
    pub placed_at: String,
    pub home_url: String,
}

impl ConfirmationView {
    #[must_use]
    pub fn new(receipt: &OrderReceipt, currency: CurrencyCode, home_url: &str) -> Self {
        let location = &receipt.location;
        Self {
            order_number: receipt.order_number.to_string(),
            rows: receipt
                .items
                .iter()
                .map(|item| SummaryRow {
                    label: format!("{} x{}", item.name, item.quantity),
                    line_total: Price::new(item.line_total(), currency).display(),
                })
                .collect(),
            total: Price::new(receipt.total, currency).display(),
            payment: receipt.payment.label(),
            deliver_to: format!(
                "{}, {} {}, {}",
                location.street.trim(),
                location.city.trim(),
                location.postal.trim(),
                location.country.trim()
            ),
            placed_at: receipt.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            home_url: home_url.to_string(),
        }
    }
}

/// Confirmation step.
#[derive(Template)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate<'a> {
    pub view: &'a ConfirmationView,
}
