//! Meal configurator.
//!
//! A [`Selection`] holds the five dropdown choices. It is updated only through
//! [`Selection::reduce`], reduced to one of six variants by
//! [`compute_variant`], and packaged into a cart line item by
//! [`Selection::to_line_item`]. Rendering lives in
//! [`crate::views::customization`].

pub mod options;
pub mod variant;

use serde::{Deserialize, Serialize};

use jeen_core::LineItemId;

use crate::models::line_item::LineItem;

pub use options::{Bread, Plate, Protein, Sauce, UnknownOption, Veggies};
pub use variant::{Preset, VariantKey, compute_variant};

/// Product name given to every configured meal.
pub const CUSTOM_ITEM_NAME: &str = "Usual Sando";

/// The configurator's working state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub plate: Plate,
    pub bread: Bread,
    pub protein: Protein,
    pub veggies: Veggies,
    pub sauce: Sauce,
}

/// A user interaction with the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    SetPlate(Plate),
    SetBread(Bread),
    SetProtein(Protein),
    SetVeggies(Veggies),
    SetSauce(Sauce),
    /// The chip's close button was pressed.
    RemoveChip(ChipKind),
    /// Back to a fresh configurator.
    Reset,
}

/// Which field a chip stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipKind {
    Bread,
    Protein,
    Veggies,
    Sauce,
}

/// A removable token for one active, non-default choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub kind: ChipKind,
    pub label: &'static str,
}

impl Selection {
    /// Apply one action and return the new selection.
    ///
    /// Every action touches one field, except that clearing veggies also
    /// clears the sauce.
    #[must_use]
    pub fn reduce(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::SetPlate(plate) => Self { plate, ..self },
            SelectionAction::SetBread(bread) => Self { bread, ..self },
            SelectionAction::SetProtein(protein) => Self { protein, ..self },
            SelectionAction::SetVeggies(veggies) => Self { veggies, ..self },
            SelectionAction::SetSauce(sauce) => Self { sauce, ..self },
            SelectionAction::RemoveChip(ChipKind::Bread) => Self {
                bread: Bread::default(),
                ..self
            },
            SelectionAction::RemoveChip(ChipKind::Protein) => Self {
                protein: Protein::default(),
                ..self
            },
            SelectionAction::RemoveChip(ChipKind::Veggies) => Self {
                veggies: Veggies::default(),
                sauce: Sauce::default(),
                ..self
            },
            SelectionAction::RemoveChip(ChipKind::Sauce) => Self {
                sauce: Sauce::default(),
                ..self
            },
            SelectionAction::Reset => Self::default(),
        }
    }

    /// The variant this selection renders as.
    #[must_use]
    pub const fn variant(&self) -> VariantKey {
        compute_variant(self)
    }

    /// Chips for the current selection, in display order.
    #[must_use]
    pub fn chips(&self) -> Vec<Chip> {
        let candidates = [
            (ChipKind::Bread, self.bread.is_default(), self.bread.label()),
            (
                ChipKind::Protein,
                self.protein.is_default(),
                self.protein.label(),
            ),
            (
                ChipKind::Veggies,
                self.veggies.is_default(),
                self.veggies.label(),
            ),
            (ChipKind::Sauce, self.sauce.is_default(), self.sauce.label()),
        ];

        candidates
            .into_iter()
            .filter(|(_, is_default, _)| !is_default)
            .map(|(kind, _, label)| Chip { kind, label })
            .collect()
    }

    /// Item description: plate, protein and veggies labels, skipping blanks.
    #[must_use]
    pub fn description(&self) -> String {
        [self.plate.label(), self.protein.label(), self.veggies.label()]
            .into_iter()
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Package the selection as a new cart line.
    ///
    /// The line gets a freshly generated id, so it never merges with an
    /// existing line even when the configuration is identical.
    #[must_use]
    pub fn to_line_item(&self, assets_dir: &str) -> LineItem {
        let variant = self.variant();
        let preset = variant.preset();

        LineItem {
            id: LineItemId::generate_custom(),
            name: CUSTOM_ITEM_NAME.to_owned(),
            price: preset.price,
            image: preview_image(assets_dir, variant),
            description: self.description(),
            quantity: 1,
            customization_state: Some(*self),
            nutrition: Some(preset.nutrition),
        }
    }
}

/// Preview image URL for a variant.
#[must_use]
pub fn preview_image(assets_dir: &str, variant: VariantKey) -> String {
    if assets_dir.is_empty() || assets_dir.ends_with('/') {
        format!("{assets_dir}{}", variant.image_file())
    } else {
        format!("{assets_dir}/{}", variant.image_file())
    }
}
