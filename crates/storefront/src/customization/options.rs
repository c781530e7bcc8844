//! The five configurator dropdowns.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A dropdown value that is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option: {value}")]
pub struct UnknownOption {
    /// Which dropdown the value was meant for.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Define a dropdown enum with its wire value, display label and default.
///
/// The wire value is what the page stores in `data-value` and in the
/// persisted selection; aliases are extra values accepted on input.
macro_rules! selection_field {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal), default $default:ident {
            $( $variant:ident => ($wire:literal, $label:literal $(, alias $alias:literal)*) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every option, in menu order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value stored in the selection record.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Text shown on chips and in item descriptions. Empty for "none".
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Whether this is the option a fresh configurator starts with.
            #[must_use]
            pub const fn is_default(self) -> bool {
                matches!(self, Self::$default)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(UnknownOption {
                        field: $field,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

selection_field! {
    /// Plate style. Cosmetic only: never affects the variant.
    Plate ("plate"), default Sandwich {
        Sandwich => ("sandwich", "Sandwich"),
        Salad => ("salad", "Salad"),
        Shaker => ("shaker", "Shaker"),
        Dessert => ("dessert", "Dessert"),
    }
}

selection_field! {
    /// Bread choice. Cosmetic only: never affects the variant.
    Bread ("bread"), default HighProtein {
        WholeWheat => ("whole-wheat", "Whole wheat"),
        HighProtein => ("high-protein", "High Protein bread"),
        GlutenFree => ("gluten-free", "Gluten Free"),
        LowCarbWrap => ("low-carb-wrap", "Low Carb Wrap"),
    }
}

selection_field! {
    /// Protein topping. The menu lists cottage cheese, which is served with eggs.
    Protein ("protein"), default None {
        None => ("none", ""),
        Eggs => ("eggs", "Eggs"),
        EggsCheese => ("eggs_cheese", "Cottage Cheese", alias "cottage-cheese"),
    }
}

selection_field! {
    /// Vegetable topping.
    Veggies ("veggies"), default None {
        None => ("none", ""),
        Avocado => ("avocado", "Avocado"),
        Tomato => ("tomato", "Tomato"),
    }
}

selection_field! {
    /// Sauce. Selectable with any veggies, though only tomato shows it.
    Sauce ("sauce"), default None {
        None => ("none", ""),
        Mustard => ("mustard", "Mustard"),
    }
}
