//! Payment methods offered at checkout.

use serde::{Deserialize, Serialize};

/// The fixed set of payment choices on the checkout payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    Cash,
    /// Credit or debit card.
    Card,
    /// Mobile wallet.
    Wallet,
}

impl PaymentMethod {
    /// Every selectable method, in display order.
    pub const ALL: [Self; 3] = [Self::Cash, Self::Card, Self::Wallet];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash on delivery",
            Self::Card => "Credit / debit card",
            Self::Wallet => "Mobile wallet",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
            Self::Wallet => write!(f, "wallet"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "wallet" => Ok(Self::Wallet),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
