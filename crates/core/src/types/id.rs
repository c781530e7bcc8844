//! Newtype string identifiers for type-safe references.
//!
//! Use the `define_token!` macro to create wrappers that prevent accidentally
//! mixing identifiers from different entity types.

/// Macro to define a type-safe string identifier.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use jeen_core::define_token;
/// define_token!(CouponCode);
/// define_token!(TableTag);
///
/// let coupon = CouponCode::new("SPRING");
/// let table = TableTag::new("SPRING");
///
/// // These are different types, so this won't compile:
/// // let _: CouponCode = table;
/// # let _ = (coupon, table);
/// ```
#[macro_export]
macro_rules! define_token {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from any string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_token!(LineItemId);
define_token!(OrderNumber);

impl LineItemId {
    /// Derive a menu item id from its product name.
    ///
    /// Runs of whitespace become a single `-` and the result is lowercased,
    /// so "Green  Power Bowl" maps to `green-power-bowl`.
    #[must_use]
    pub fn from_product_name(name: &str) -> Self {
        let slug = name
            .trim()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        Self(slug)
    }

    /// Generate a fresh id for a customized item.
    ///
    /// The token combines the creation time with a random suffix; two
    /// customized items never share an id and so never merge in the cart.
    #[must_use]
    pub fn generate_custom() -> Self {
        Self(format!(
            "custom-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple()
        ))
    }
}

impl OrderNumber {
    /// Generate a new order number.
    #[must_use]
    pub fn generate() -> Self {
        let token = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
        let short: String = token.chars().take(8).collect();
        Self(format!("JEEN-{short}"))
    }
}
