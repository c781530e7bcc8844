//! Reduction of a selection to one of the six photographed variants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::options::{Protein, Sauce, Veggies};
use super::Selection;
use crate::models::line_item::Nutrition;

/// One of the fixed product configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKey {
    Base,
    Eggs,
    EggsCheese,
    Avocado,
    Tomato,
    TomatoMustard,
}

/// Fixed price and nutrition of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Unit price.
    pub price: Decimal,
    /// Nutrition facts for one serving.
    pub nutrition: Nutrition,
}

impl VariantKey {
    /// All variants.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::Eggs,
        Self::EggsCheese,
        Self::Avocado,
        Self::Tomato,
        Self::TomatoMustard,
    ];

    /// Stable name, also the image file stem.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Eggs => "eggs",
            Self::EggsCheese => "eggs_cheese",
            Self::Avocado => "avocado",
            Self::Tomato => "tomato",
            Self::TomatoMustard => "tomato_mustard",
        }
    }

    /// Preview image file name inside the assets directory.
    #[must_use]
    pub fn image_file(self) -> String {
        format!("{}.png", self.as_str())
    }

    /// Price and nutrition for this variant.
    #[must_use]
    pub fn preset(self) -> Preset {
        // (price, kcal, protein g, carbs g in tenths, fat g in tenths)
        let (price, calories, protein, carbs_tenths, fat_tenths) = match self {
            Self::Base => (5, 100, 10, 120, 50),
            Self::Eggs => (6, 200, 18, 150, 80),
            Self::EggsCheese => (8, 250, 22, 205, 100),
            Self::Avocado => (10, 312, 28, 205, 150),
            Self::Tomato => (11, 325, 28, 205, 185),
            Self::TomatoMustard => (10, 548, 36, 265, 205),
        };

        Preset {
            price: Decimal::from(price),
            nutrition: Nutrition {
                calories,
                protein: Decimal::from(protein),
                carbs: Decimal::new(carbs_tenths, 1).normalize(),
                fat: Decimal::new(fat_tenths, 1).normalize(),
            },
        }
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a selection to its variant.
///
/// First match wins:
/// 1. tomato with mustard
/// 2. tomato
/// 3. avocado
/// 4. eggs with cottage cheese
/// 5. eggs
/// 6. base
///
/// Veggies take precedence over protein, so eggs with avocado renders the
/// avocado variant. Plate and bread never take part.
#[must_use]
pub const fn compute_variant(selection: &Selection) -> VariantKey {
    match (selection.veggies, selection.sauce, selection.protein) {
        (Veggies::Tomato, Sauce::Mustard, _) => VariantKey::TomatoMustard,
        (Veggies::Tomato, _, _) => VariantKey::Tomato,
        (Veggies::Avocado, _, _) => VariantKey::Avocado,
        (Veggies::None, _, Protein::EggsCheese) => VariantKey::EggsCheese,
        (Veggies::None, _, Protein::Eggs) => VariantKey::Eggs,
        (Veggies::None, _, Protein::None) => VariantKey::Base,
    }
}
