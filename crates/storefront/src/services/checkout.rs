//! Inline checkout wizard.
//!
//! A linear state machine: `Summary -> Address -> Payment -> Confirmation`.
//! Transitions only move forward, and wizard progress is never persisted.
//! Confirming an order clears the cart through the [`CartService`].

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use jeen_core::{OrderNumber, PaymentMethod};

use super::cart::CartService;
use crate::db::{KeyValueStore, RepositoryError};
use crate::models::line_item::LineItem;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// The cart page before checkout starts.
    #[default]
    Summary,
    Address,
    Payment,
    /// Terminal; the only exit is navigating home.
    Confirmation,
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Summary => "summary",
            Self::Address => "address",
            Self::Payment => "payment",
            Self::Confirmation => "confirmation",
        };
        f.write_str(name)
    }
}

/// Delivery location fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressForm {
    pub country: String,
    pub city: String,
    pub postal: String,
    pub street: String,
}

/// One field of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Country,
    City,
    Postal,
    Street,
}

impl AddressField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::City => "city",
            Self::Postal => "postal",
            Self::Street => "street",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AddressForm {
    /// Fields that are blank after trimming, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<AddressField> {
        [
            (AddressField::Country, &self.country),
            (AddressField::City, &self.city),
            (AddressField::Postal, &self.postal),
            (AddressField::Street, &self.street),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Errors raised by wizard transitions.
///
/// None of them changes the wizard's step or the entered data.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,

    #[error("Please fill in all location fields before proceeding.")]
    MissingFields(Vec<AddressField>),

    #[error("Please choose a payment method.")]
    MissingPayment,

    #[error("cannot do that from the {actual} step (expected {expected})")]
    InvalidStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Snapshot captured when an order is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub order_number: OrderNumber,
    pub items: Vec<LineItem>,
    pub location: AddressForm,
    pub payment: PaymentMethod,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

/// Checkout wizard state.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    step: CheckoutStep,
    address: AddressForm,
    receipt: Option<OrderReceipt>,
    home_url: String,
}

impl Checkout {
    /// A wizard at the summary step.
    #[must_use]
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            home_url: home_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The address as last entered.
    #[must_use]
    pub const fn address(&self) -> &AddressForm {
        &self.address
    }

    /// The receipt, once confirmed.
    #[must_use]
    pub const fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Where the confirmation page's only button leads.
    #[must_use]
    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::InvalidStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Start checkout and show a blank address form.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    pub fn begin<S: KeyValueStore + ?Sized>(
        &mut self,
        cart: &CartService<'_, S>,
    ) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Summary)?;
        if cart.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.address = AddressForm::default();
        self.step = CheckoutStep::Address;
        Ok(())
    }

    /// Submit the address form.
    ///
    /// The form is kept exactly as entered whether or not it is accepted.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingFields` listing every blank field.
    pub fn submit_address(&mut self, form: AddressForm) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Address)?;

        let missing = form.missing_fields();
        self.address = form;
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Place the order: capture the receipt, then clear the cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingPayment` if no method was chosen.
    /// Returns `CheckoutError::Repository` if the cart cannot be cleared.
    #[instrument(skip(self, cart))]
    pub fn confirm<S: KeyValueStore + ?Sized>(
        &mut self,
        payment: Option<PaymentMethod>,
        cart: &mut CartService<'_, S>,
    ) -> Result<&OrderReceipt, CheckoutError> {
        self.expect_step(CheckoutStep::Payment)?;
        let payment = payment.ok_or(CheckoutError::MissingPayment)?;

        let receipt = OrderReceipt {
            order_number: OrderNumber::generate(),
            items: cart.cart().items().to_vec(),
            location: self.address.clone(),
            payment,
            total: cart.cart().total(),
            placed_at: Utc::now(),
        };

        cart.clear()?;

        tracing::info!(
            order_number = %receipt.order_number,
            payment = %receipt.payment,
            total = %receipt.total,
            lines = receipt.items.len(),
            "Order placed"
        );

        self.step = CheckoutStep::Confirmation;
        Ok(&*self.receipt.insert(receipt))
    }
}
