//! Meal configurator.

use clap::{Args, ValueEnum};

use jeen_storefront::AppError;
use jeen_storefront::customization::{
    Bread, ChipKind, Plate, Protein, Sauce, Selection, SelectionAction, Veggies,
};
use jeen_storefront::views::{ConfiguratorView, PreviewTemplate};

use super::{Site, render, to_json};
use crate::Format;

#[derive(Args)]
pub struct CustomizeArgs {
    /// sandwich, salad, shaker or dessert
    #[arg(long)]
    plate: Option<Plate>,

    /// whole-wheat, high-protein, gluten-free or low-carb-wrap
    #[arg(long)]
    bread: Option<Bread>,

    /// none, eggs or eggs_cheese (also cottage-cheese)
    #[arg(long)]
    protein: Option<Protein>,

    /// none, avocado or tomato
    #[arg(long)]
    veggies: Option<Veggies>,

    /// none or mustard
    #[arg(long)]
    sauce: Option<Sauce>,

    /// Remove a chip after applying the choices (repeatable)
    #[arg(long = "remove-chip", value_enum)]
    remove_chips: Vec<ChipArg>,

    /// Add the configured meal to the cart
    #[arg(long)]
    add: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChipArg {
    Bread,
    Protein,
    Veggies,
    Sauce,
}

impl From<ChipArg> for ChipKind {
    fn from(arg: ChipArg) -> Self {
        match arg {
            ChipArg::Bread => Self::Bread,
            ChipArg::Protein => Self::Protein,
            ChipArg::Veggies => Self::Veggies,
            ChipArg::Sauce => Self::Sauce,
        }
    }
}

impl CustomizeArgs {
    /// The actions a user would click through, in order.
    fn actions(&self) -> Vec<SelectionAction> {
        let choices = [
            self.plate.map(SelectionAction::SetPlate),
            self.bread.map(SelectionAction::SetBread),
            self.protein.map(SelectionAction::SetProtein),
            self.veggies.map(SelectionAction::SetVeggies),
            self.sauce.map(SelectionAction::SetSauce),
        ];
        choices
            .into_iter()
            .flatten()
            .chain(
                self.remove_chips
                    .iter()
                    .map(|chip| SelectionAction::RemoveChip((*chip).into())),
            )
            .collect()
    }

    fn selection(&self) -> Selection {
        self.actions()
            .into_iter()
            .fold(Selection::default(), Selection::reduce)
    }
}

/// Preview a selection, adding it to the cart with `--add`.
///
/// With `--json --add` the output carries the stored line and its fly-to-cart
/// cue next to the selection.
pub fn run(site: &Site, args: &CustomizeArgs, format: Format) -> Result<String, AppError> {
    let selection = args.selection();
    let config = site.config();

    let added = if args.add {
        let mut cart = site.cart()?;
        let added = cart.add_customized(&selection)?;
        tracing::debug!(
            image = %added.cue.image,
            duration_ms = added.cue.duration.as_millis(),
            "Fly-to-cart cue"
        );
        Some((added, cart.cart().item_count()))
    } else {
        None
    };

    if format == Format::Json {
        return match added {
            Some((added, _)) => to_json(&serde_json::json!({
                "selection": selection,
                "added": {
                    "item": added.item,
                    "cue": {
                        "image": added.cue.image,
                        "durationMs": added.cue.duration.as_millis(),
                    },
                },
            })),
            None => to_json(&selection),
        };
    }

    let view = ConfiguratorView::new(&selection, &config.assets_dir, config.currency);
    let mut out = match format {
        Format::Html => render(&PreviewTemplate { view: &view })?,
        _ => preview_text(&view),
    };
    if let (Format::Text, Some((added, count))) = (format, added) {
        out.push_str(&format!(
            "\nAdded {} to the cart ({count} items).",
            added.item.name
        ));
    }

    Ok(out)
}

fn preview_text(view: &ConfiguratorView) -> String {
    let chips: Vec<_> = view.chips.iter().map(|chip| chip.label).collect();
    format!(
        "{} [{}]\nImage: {}\nPrice: {}\nCalories: {}  Protein: {}  Carbs: {}  Fats: {}\nChips: {}",
        view.description,
        view.variant,
        view.image,
        view.price,
        view.calories,
        view.protein,
        view.carbs,
        view.fat,
        if chips.is_empty() { "-".to_string() } else { chips.join(", ") }
    )
}
