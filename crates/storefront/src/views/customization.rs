//! Configurator preview projection.

use askama::Template;
use rust_decimal::Decimal;

use jeen_core::{CurrencyCode, Price};

use crate::customization::{ChipKind, Selection, preview_image};

/// A removable chip as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    /// Field name, used by the close button.
    pub field: &'static str,
    pub label: &'static str,
}

/// Everything the preview panel shows for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguratorView {
    pub variant: &'static str,
    pub image: String,
    pub price: String,
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub description: String,
    pub chips: Vec<ChipView>,
}

impl ConfiguratorView {
    /// Project a selection.
    #[must_use]
    pub fn new(selection: &Selection, assets_dir: &str, currency: CurrencyCode) -> Self {
        let variant = selection.variant();
        let preset = variant.preset();

        Self {
            variant: variant.as_str(),
            image: preview_image(assets_dir, variant),
            price: Price::new(preset.price, currency).display(),
            calories: preset.nutrition.calories,
            protein: grams(preset.nutrition.protein),
            carbs: grams(preset.nutrition.carbs),
            fat: grams(preset.nutrition.fat),
            description: selection.description(),
            chips: selection
                .chips()
                .into_iter()
                .map(|chip| ChipView {
                    field: chip_field(chip.kind),
                    label: chip.label,
                })
                .collect(),
        }
    }
}

fn grams(value: Decimal) -> String {
    format!("{}g", value.normalize())
}

const fn chip_field(kind: ChipKind) -> &'static str {
    match kind {
        ChipKind::Bread => "bread",
        ChipKind::Protein => "protein",
        ChipKind::Veggies => "veggies",
        ChipKind::Sauce => "sauce",
    }
}

/// Preview panel.
#[derive(Template)]
#[template(path = "customization/preview.html")]
pub struct PreviewTemplate<'a> {
    pub view: &'a ConfiguratorView,
}
